pub mod loader;
pub mod synthetic;

use crate::data::SampleSet;

pub trait SampleGenerator {
    fn generate(&mut self, count: usize) -> SampleSet;
}
