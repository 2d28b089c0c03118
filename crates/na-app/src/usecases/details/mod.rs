//! Details screen controller.

mod controller;

pub use controller::{
    DetailsController, DetailsError, DetailsEventSink, DetailsScreen, DEFAULT_TOGGLE_TIMEOUT,
};
