//! Liskov Substitution Principle.

use crate::domain::model::Principle;
use crate::domain::ports::Demonstration;
use crate::utils::error::Result;
use std::io::Write;

pub mod legacy {
    use crate::utils::error::{Result, SolidError};

    pub trait Bird {
        fn fly(&self) -> Result<&'static str> {
            Ok("I can fly!")
        }
    }

    #[derive(Debug, Clone, Copy, Default)]
    pub struct Sparrow;

    impl Bird for Sparrow {}

    /// Substituting an `Ostrich` for a `Bird` breaks every caller of `fly`.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct Ostrich;

    impl Bird for Ostrich {
        fn fly(&self) -> Result<&'static str> {
            Err(SolidError::unsupported("Ostrich", "fly", "I cannot fly!"))
        }
    }
}

pub mod fixed {
    /// Movement in whatever form the bird supports. Never fails.
    pub trait Bird {
        fn r#move(&self) -> &'static str;
    }

    #[derive(Debug, Clone, Copy, Default)]
    pub struct FlyingBird;

    impl Bird for FlyingBird {
        fn r#move(&self) -> &'static str {
            "I can fly!"
        }
    }

    #[derive(Debug, Clone, Copy, Default)]
    pub struct Ostrich;

    impl Bird for Ostrich {
        fn r#move(&self) -> &'static str {
            "I cannot fly, but I can run!"
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LspDemo;

impl Demonstration for LspDemo {
    fn principle(&self) -> Principle {
        Principle::Lsp
    }

    fn run_legacy(&self, out: &mut dyn Write) -> Result<()> {
        let birds: [(&str, &dyn legacy::Bird); 2] =
            [("sparrow", &legacy::Sparrow), ("ostrich", &legacy::Ostrich)];
        for (name, bird) in birds {
            tracing::debug!(bird = name, "asking bird to fly");
            writeln!(out, "{}: {}", name, bird.fly()?)?;
        }
        Ok(())
    }

    fn run_fixed(&self, out: &mut dyn Write) -> Result<()> {
        let birds: [(&str, &dyn fixed::Bird); 2] =
            [("ostrich", &fixed::Ostrich), ("sparrow", &fixed::FlyingBird)];
        for (name, bird) in birds {
            writeln!(out, "{}: {}", name, bird.r#move())?;
        }
        Ok(())
    }
}
