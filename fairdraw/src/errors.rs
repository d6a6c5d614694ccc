use quick_error::quick_error;

quick_error! {
    #[derive(Debug, Clone, PartialEq)]
    pub enum ConfigError {
        InvalidRange(min: i32, max: i32) {
            display("invalid range {} to {}: min must be less than max", min, max)
        }
        MinimumBelowOne(min: i32) {
            display("minimum value {} is less than 1", min)
        }
        ConfidenceOutOfRange(level: f64) {
            display("confidence level {} is outside [{}, {}]", level,
                    crate::validator::MIN_CONFIDENCE_LEVEL, crate::validator::MAX_CONFIDENCE_LEVEL)
        }
    }
}
