//! Interface Segregation Principle.

use crate::domain::model::Principle;
use crate::domain::ports::Demonstration;
use crate::utils::error::Result;
use std::fmt;
use std::io::Write;

pub mod legacy {
    use crate::utils::error::{Result, SolidError};

    /// One trait for every animal, whether or not it can fly.
    pub trait Animal {
        fn run(&self) -> Result<&'static str>;
        fn fly(&self) -> Result<&'static str>;
    }

    #[derive(Debug, Clone, Copy, Default)]
    pub struct Dog;

    impl Animal for Dog {
        fn run(&self) -> Result<&'static str> {
            Ok("Dog runs")
        }

        fn fly(&self) -> Result<&'static str> {
            Err(SolidError::unsupported("Dog", "fly", "dogs can't fly"))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Run,
    Fly,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Run => f.write_str("run"),
            Capability::Fly => f.write_str("fly"),
        }
    }
}

pub mod fixed {
    use super::Capability;

    pub trait Runner {
        fn run(&self) -> &'static str;
    }

    pub trait Flyer {
        fn fly(&self) -> &'static str;
    }

    /// The set of capability traits a creature implements, listed for inspection.
    pub trait Capabilities {
        const NAME: &'static str;
        const CAPABILITIES: &'static [Capability];
    }

    #[derive(Debug, Clone, Copy, Default)]
    pub struct Dog;

    impl Runner for Dog {
        fn run(&self) -> &'static str {
            "Dog runs"
        }
    }

    impl Capabilities for Dog {
        const NAME: &'static str = "Dog";
        const CAPABILITIES: &'static [Capability] = &[Capability::Run];
    }

    #[derive(Debug, Clone, Copy, Default)]
    pub struct Bird;

    impl Runner for Bird {
        fn run(&self) -> &'static str {
            "Bird can run"
        }
    }

    impl Flyer for Bird {
        fn fly(&self) -> &'static str {
            "Bird can fly"
        }
    }

    impl Capabilities for Bird {
        const NAME: &'static str = "Bird";
        const CAPABILITIES: &'static [Capability] = &[Capability::Run, Capability::Fly];
    }
}

fn describe<C: fixed::Capabilities>() -> String {
    let names: Vec<String> = C::CAPABILITIES.iter().map(|c| c.to_string()).collect();
    format!("{} can: {}", C::NAME, names.join(", "))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IspDemo;

impl Demonstration for IspDemo {
    fn principle(&self) -> Principle {
        Principle::Isp
    }

    fn run_legacy(&self, out: &mut dyn Write) -> Result<()> {
        use self::legacy::Animal;

        let dog = legacy::Dog;
        writeln!(out, "{}", dog.run()?)?;
        writeln!(out, "{}", dog.fly()?)?;
        Ok(())
    }

    fn run_fixed(&self, out: &mut dyn Write) -> Result<()> {
        use self::fixed::{Flyer, Runner};

        writeln!(out, "{}", describe::<fixed::Dog>())?;
        writeln!(out, "{}", describe::<fixed::Bird>())?;

        let runners: [&dyn Runner; 2] = [&fixed::Dog, &fixed::Bird];
        for runner in runners {
            writeln!(out, "{}", runner.run())?;
        }

        let flyers: [&dyn Flyer; 1] = [&fixed::Bird];
        for flyer in flyers {
            writeln!(out, "{}", flyer.fly())?;
        }
        Ok(())
    }
}
