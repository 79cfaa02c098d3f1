use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

pub enum Event {
    Line(String),
    Eof,
}

/// Feeds stdin lines into the app loop through a channel. All state
/// mutation happens on the receiving side; this thread only forwards.
pub struct Dispatcher {
    rx: mpsc::Receiver<Event>,
    tx: mpsc::Sender<Event>,
    _input_handle: thread::JoinHandle<()>,
}

impl Default for Dispatcher {
    fn default() -> Dispatcher {
        Dispatcher::new()
    }
}

impl Dispatcher {
    pub fn new() -> Dispatcher {
        let (tx, rx) = mpsc::channel();
        let input_handle = {
            let tx = tx.clone();
            thread::spawn(move || {
                let stdin = io::stdin();
                let stdin = stdin.lock();
                for line in stdin.lines() {
                    match line {
                        Ok(line) => {
                            if tx.send(Event::Line(line)).is_err() {
                                return;
                            }
                        }
                        Err(_) => break,
                    }
                }
                let _ = tx.send(Event::Eof);
            })
        };
        Dispatcher {
            rx,
            tx,
            _input_handle: input_handle,
        }
    }

    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }

    pub fn event_sink(&self) -> &mpsc::Sender<Event> {
        &self.tx
    }
}
