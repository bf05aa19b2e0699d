/// Logging port for the application layer. Infrastructure provides the
/// concrete backend so use cases stay free of logging framework types.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
