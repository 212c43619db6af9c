pub mod homework;
pub mod notifier;
pub mod poller;
pub mod practicum;
pub mod retry;
