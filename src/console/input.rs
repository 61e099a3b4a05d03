use crossbeam_channel as cbc;
use log::{debug, error};
use std::io::{self, BufRead};
use std::thread::{Builder, JoinHandle};

/**
 * Spawns the thread that reads the console from stdin.
 *
 * Every line is forwarded as typed. The sender is dropped at end of input, which tells the
 * console to shut down.
 */
pub fn spawn_stdin_reader(input_tx: cbc::Sender<String>) -> io::Result<JoinHandle<()>> {
    Builder::new()
        .name("stdin_reader".into())
        .spawn(move || forward_lines(io::stdin().lock(), input_tx))
}

pub fn forward_lines<R: BufRead>(reader: R, input_tx: cbc::Sender<String>) {
    for line in reader.lines() {
        match line {
            Ok(line) => {
                if input_tx.send(line).is_err() {
                    debug!("Console is gone, stopping input reader");
                    return;
                }
            }
            Err(e) => {
                error!("Error reading from stdin: {}", e);
                return;
            }
        }
    }
    debug!("End of input");
}
