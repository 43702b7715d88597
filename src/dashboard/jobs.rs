use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::sync::Arc;

/// Callback invoked by a worker after it posted a result, used to wake the
/// render loop.
pub type RepaintFn = Arc<dyn Fn() + Send + Sync>;

/// Handle to a background job. Cancelling it drops the job's result instead
/// of delivering it; the worker thread itself is never interrupted.
#[derive(Clone, Debug)]
pub struct JobHandle {
    name: &'static str,
    cancelled: Arc<AtomicBool>,
    finished: Arc<AtomicBool>,
}

impl JobHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    pub fn is_finished(&self) -> bool {
        self.finished.load(Ordering::SeqCst)
    }
}

/// Spawns one short-lived thread per job and collects their results on a
/// channel owned by the render loop.
pub struct BackgroundJobs<T> {
    tx: Sender<T>,
    rx: Receiver<T>,
    repaint: Option<RepaintFn>,
    in_flight: Vec<JobHandle>,
}

impl<T: Send + 'static> BackgroundJobs<T> {
    pub fn new(repaint: Option<RepaintFn>) -> Self {
        let (tx, rx) = channel();
        Self {
            tx,
            rx,
            repaint,
            in_flight: Vec::new(),
        }
    }

    /// Run `job` on a new thread. Its return value is posted to the channel
    /// unless the handle was cancelled first.
    pub fn spawn<F>(&mut self, name: &'static str, job: F) -> JobHandle
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let handle = JobHandle {
            name,
            cancelled: Arc::new(AtomicBool::new(false)),
            finished: Arc::new(AtomicBool::new(false)),
        };
        let worker = handle.clone();
        let tx = self.tx.clone();
        let repaint = self.repaint.clone();
        let spawned = std::thread::Builder::new()
            .name(format!("fetch-{name}"))
            .spawn(move || {
                let result = job();
                if !worker.is_cancelled() && tx.send(result).is_ok() {
                    if let Some(repaint) = &repaint {
                        repaint();
                    }
                } else {
                    tracing::debug!("dropping result of cancelled job {}", worker.name);
                }
                worker.finished.store(true, Ordering::SeqCst);
            });
        match spawned {
            Ok(_) => {
                self.in_flight.retain(|h| !h.is_finished());
                self.in_flight.push(handle.clone());
            }
            Err(e) => {
                tracing::error!("failed to spawn {name} worker: {e}");
                handle.finished.store(true, Ordering::SeqCst);
            }
        }
        handle
    }

    /// Take every result posted since the last call without blocking.
    pub fn drain(&mut self) -> Vec<T> {
        let mut out = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(v) => out.push(v),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        self.in_flight.retain(|h| !h.is_finished());
        out
    }

    /// Block until a result arrives or `timeout` elapses.
    pub fn recv_timeout(&mut self, timeout: std::time::Duration) -> Option<T> {
        self.rx.recv_timeout(timeout).ok()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.iter().filter(|h| !h.is_finished()).count()
    }

    pub fn cancel_all(&mut self) {
        for handle in self.in_flight.drain(..) {
            handle.cancel();
        }
    }
}
