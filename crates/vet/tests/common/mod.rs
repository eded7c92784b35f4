#![allow(dead_code)]

use std::error::Error;
use std::fmt;

use thiserror::Error;
use vet::{Equals, LessThan, Policy, Recorder};

pub fn quiet() -> Recorder {
    Recorder::named("vet-test").with_policy(Policy::default().with_echo(false))
}

pub fn last_line(rec: &Recorder) -> String {
    rec.lines().last().cloned().unwrap_or_default()
}

/// Release identifier whose equality ignores the build label.
#[derive(Debug, Clone, Copy)]
pub struct Release {
    pub major: u32,
    pub minor: u32,
    pub build: &'static str,
}

impl Release {
    pub fn new(major: u32, minor: u32, build: &'static str) -> Self {
        Self {
            major,
            minor,
            build,
        }
    }
}

impl Equals for Release {
    fn equals(&self, other: &Self) -> bool {
        self.major == other.major && self.minor == other.minor
    }
}

impl LessThan for Release {
    fn less(&self, other: &Self) -> bool {
        (self.major, self.minor) < (other.major, other.minor)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("key {0} not found")]
    NotFound(String),
    #[error("store closed")]
    Closed,
}

#[derive(Debug)]
pub struct Wrapped {
    pub depth: usize,
    pub inner: Box<dyn Error + 'static>,
}

impl fmt::Display for Wrapped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer {}: {}", self.depth, self.inner)
    }
}

impl Error for Wrapped {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

pub fn wrap(err: StoreError, depth: usize) -> Box<dyn Error + 'static> {
    let mut current: Box<dyn Error + 'static> = Box::new(err);
    for layer in 0..depth {
        current = Box::new(Wrapped {
            depth: layer,
            inner: current,
        });
    }
    current
}
