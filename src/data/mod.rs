mod data_sample;
pub use data_sample::DataSample;

mod observation;
pub use observation::Observation;
