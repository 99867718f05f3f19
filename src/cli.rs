use std::io::Read;

use crate::value::Value;
use crate::{err, Error};
use crate::{to_bool, to_float, to_int, to_map, to_slice, to_string};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Requested output type
#[derive(Debug, Copy, Clone, Default, PartialEq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Target {
    #[default]
    String,
    Int,
    Float,
    Bool,
    Map,
    Slice,
    Value,
}

impl Target {
    /// Cast a value and render the result as one line of output
    pub fn render(&self, value: &Value, pretty: bool) -> Result<String, Error> {
        let rendered = match self {
            Target::String => to_string(value),
            Target::Int => to_int(value).to_string(),
            Target::Float => to_float(value).to_string(),
            Target::Bool => to_bool(value).to_string(),
            Target::Map => json(&Value::Map(to_map(value)), pretty)?,
            Target::Slice => json(&Value::Seq(to_slice(value)), pretty)?,
            Target::Value => json(value, pretty)?,
        };
        Ok(rendered)
    }
}

fn json(value: &Value, pretty: bool) -> Result<String, Error> {
    if pretty {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(serde_json::to_string(value)?)
    }
}

/// Coerce JSON input into a requested type
#[derive(clap::Parser, Debug, Clone)]
#[command(version = VERSION, about)]
pub struct Cli {
    /// JSON input, read from stdin when omitted
    pub input: Option<String>,

    /// Type to cast the input into
    #[arg(short, long, default_value_t = Target::String)]
    pub to: Target,

    /// Cast every element of a top-level array, one per line
    #[arg(long)]
    pub each: bool,

    /// Keep numbers as numeric text until they are cast
    #[arg(long)]
    pub use_number: bool,

    /// Pretty-print maps and arrays
    #[arg(long)]
    pub pretty: bool,
}

impl Cli {
    pub fn read_input(&self) -> Result<String, Error> {
        if let Some(input) = &self.input {
            return Ok(input.clone());
        }

        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| err!(e))?;
        Ok(text)
    }

    pub fn outputs(&self, text: &str) -> Result<Vec<String>, Error> {
        let value = if self.use_number {
            Value::from_json_numbers(text)?
        } else {
            text.parse::<Value>()?
        };

        log::debug!("casting {} input to {}", value.kind(), self.to);

        if self.each {
            to_slice(&value)
                .iter()
                .map(|v| self.to.render(v, self.pretty))
                .collect()
        } else {
            Ok(vec![self.to.render(&value, self.pretty)?])
        }
    }
}
