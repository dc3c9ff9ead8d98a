/// Classification metrics over boolean predictions
pub mod confusion;
