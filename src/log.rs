//! Error reporting through `tracing`

/// An error that knows how to report itself
pub trait ProjectError: std::error::Error
{
    /// Short category name shown in front of the message
    fn title(&self) -> String;

    /// Function for default handling an error
    ///
    /// Emits the error as a `tracing` event, the caller decides on the subscriber
    fn handle(&self)
    {
        let title = self.title();
        tracing::error!(title = %title, error = %self, "[{} Error] {}", title, self);
    }
}

/// Runs `f` under a `tracing` subscriber that records every event as plain text
#[cfg(test)]
pub(crate) fn capture_events(f: impl FnOnce()) -> String
{
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Buffer
    {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize>
        {
            self.0.lock().unwrap_or_else(|e| e.into_inner()).extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> { Ok(()) }
    }

    let buffer = Buffer(Arc::new(Mutex::new(Vec::new())));
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);

    let bytes = buffer.0.lock().unwrap_or_else(|e| e.into_inner()).clone();
    String::from_utf8_lossy(&bytes).into_owned()
}
