pub mod report;

pub use report::{AttemptOutcome, DemoAttempt, DemoReport};

use crate::usecases::common::UseCaseMetadata;

pub struct ConcurrencyDemo;

impl UseCaseMetadata for ConcurrencyDemo {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "concurrency_demo"
    }

    fn display_name() -> &'static str {
        "Демо: оптимистичная блокировка"
    }

    fn description() -> &'static str {
        "Два параллельных PATCH-запроса к одной строке с одной и той же версией: \
         один проходит, второй получает конфликт версий"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(ConcurrencyDemo::full_name(), "u501_concurrency_demo");
    }
}
