/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{error, info};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::ConsoleConfig;
use crate::console::command::{Command, HELP_TEXT};
use crate::elevator::{ElevatorCar, SubmitOutcome};
use crate::shared::Floor;

/***************************************/
/*               Enums                 */
/***************************************/
enum Event {
    LineReceived(String),
    InputClosed,
    Terminate,
}

/// What the console wants shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleOutput {
    Line(String),
    Prompt,
}

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Command dispatcher for the simulator.
 *
 * The `Console` owns the elevator car and is the only thing that touches it. Raw lines arrive on
 * `input_rx`, are parsed into commands and applied to the car one at a time, in arrival order.
 * Everything meant for the user leaves through `output_tx`.
 *
 * # Fields
 * - `car`:             The simulated elevator car.
 * - `json_status`:     Emit `status` as JSON instead of the status line.
 * - `input_rx`:        Receives raw console lines.
 * - `output_tx`:       Sends lines and prompts to whoever renders the console.
 * - `terminate_rx`:    Stops the dispatcher loop.
 */
pub struct Console {
    car: ElevatorCar,
    json_status: bool,
    input_rx: cbc::Receiver<String>,
    output_tx: cbc::Sender<ConsoleOutput>,
    terminate_rx: cbc::Receiver<()>,
}

impl Console {
    pub fn new(
        car: ElevatorCar,
        config: &ConsoleConfig,
        input_rx: cbc::Receiver<String>,
        output_tx: cbc::Sender<ConsoleOutput>,
        terminate_rx: cbc::Receiver<()>,
    ) -> Console {
        Console {
            car,
            json_status: config.json_status,
            input_rx,
            output_tx,
            terminate_rx,
        }
    }

    /// Runs until `quit`, end of input or a terminate message, then hands the car back.
    pub fn run(mut self) -> ElevatorCar {
        self.emit("Elevator sim started. Type 'help' for commands.");
        self.emit_status();

        loop {
            self.prompt();
            match self.wait_for_event() {
                Event::LineReceived(line) => {
                    if !self.handle_line(&line) {
                        break;
                    }
                }
                Event::InputClosed => {
                    info!("Input closed, leaving console");
                    break;
                }
                Event::Terminate => {
                    info!("Console terminated");
                    break;
                }
            }
        }

        self.car
    }

    fn wait_for_event(&self) -> Event {
        cbc::select! {
            recv(self.input_rx) -> line => {
                match line {
                    Ok(line) => Event::LineReceived(line),
                    Err(_) => Event::InputClosed,
                }
            }
            recv(self.terminate_rx) -> _ => Event::Terminate,
        }
    }

    // Returns false once the user asked to quit
    fn handle_line(&mut self, line: &str) -> bool {
        if line.trim().is_empty() {
            return true;
        }

        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(e) => {
                self.emit(&e.to_string());
                return true;
            }
        };

        match command {
            Command::Help => {
                for help_line in HELP_TEXT.lines() {
                    self.emit(help_line);
                }
            }
            Command::Call(floor) => {
                info!("Hall call at floor {}", floor);
                self.submit(floor);
            }
            Command::Select(floor) => {
                info!("Car selection of floor {}", floor);
                self.submit(floor);
            }
            Command::Step(ticks) => {
                // Events go out as each tick completes
                for _ in 0..ticks.max(1) {
                    for event in self.car.advance() {
                        self.emit(&format!("[Tick] {event}"));
                    }
                }
            }
            Command::Status => self.emit_status(),
            Command::Quit => {
                self.emit("Goodbye!");
                return false;
            }
        }
        true
    }

    fn submit(&mut self, floor: Floor) {
        match self.car.submit_request(floor) {
            Ok(SubmitOutcome::Queued(_)) => self.emit_status(),
            Ok(SubmitOutcome::ServedImmediately) => self.emit(&format!(
                "Serving floor {floor} now (already here). Doors opening..."
            )),
            Err(e) => self.emit(&e.to_string()),
        }
    }

    fn emit_status(&self) {
        let status = self.car.status();
        if self.json_status {
            match serde_json::to_string(&status) {
                Ok(json) => self.emit(&json),
                Err(e) => error!("Failed to serialize status: {}", e),
            }
        } else {
            self.emit(&status.to_string());
        }
    }

    fn emit(&self, line: &str) {
        self.send(ConsoleOutput::Line(line.to_string()));
    }

    fn prompt(&self) {
        self.send(ConsoleOutput::Prompt);
    }

    fn send(&self, output: ConsoleOutput) {
        if let Err(e) = self.output_tx.send(output) {
            error!("Failed to send console output: {:?}", e);
        }
    }
}
