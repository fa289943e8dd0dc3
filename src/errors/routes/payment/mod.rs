pub mod complete;

pub use complete::PaymentCompleteError;
