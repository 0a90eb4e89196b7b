use serde::Serialize;

pub mod speed;
pub mod vector;
pub mod waves;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Metoc(#[from] metoc::Error),
    #[error("{0}")]
    Args(&'static str),
    #[error("failed to serialize result")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Copy)]
pub struct Output {
    pub json: bool,
}

impl Output {
    /// Print `value` as JSON, or the human readable `lines` otherwise.
    pub fn print<T: Serialize>(self, value: &T, lines: &[String]) -> Result<(), Error> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            for line in lines {
                println!("{}", line);
            }
        }
        Ok(())
    }
}
