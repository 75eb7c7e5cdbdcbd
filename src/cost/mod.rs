mod binary_labeling;

pub use binary_labeling::BinaryLabelingCost;
