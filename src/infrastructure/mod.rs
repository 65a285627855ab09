pub mod tokio_scheduler;
