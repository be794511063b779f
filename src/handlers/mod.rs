pub mod app;
pub mod decide;
pub mod metrics_view;
pub mod ops;
pub mod proxy;
