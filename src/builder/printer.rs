use super::{field::Field, operation::Operation, pretty, value::*};
use chrono::SecondsFormat;
use std::{fmt, fmt::Write, num::NonZeroI32};

/// Trait for printing builder values to a new String allocated on the heap.
///
/// This is implemented by fields, operations, and argument values, and prints the compact form
/// that's sent to a GraphQL service, e.g. `user(id:42){id,name}`. No whitespace is ever emitted
/// apart from what's contained in names and string literals.
///
/// All types that implement `PrintNode` also implement the [`fmt::Display`] trait.
pub trait PrintNode {
    /// Write a node to a buffer implementing the [Write] trait.
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result;

    /// Print a node to its compact source text as a String allocated on the heap.
    fn print(&self) -> String {
        let mut buf = String::new();
        match self.write_to_buffer(&mut buf) {
            Ok(()) => buf,
            _ => "".to_string(),
        }
    }

    /// Print a node and reformat it for display using [`pretty::pretty_print`] with the
    /// default indentation.
    fn pretty_print(&self) -> String {
        pretty::pretty_print(&self.print(), pretty::DEFAULT_INDENT)
    }
}

/// Number format of JavaScript's `Number.prototype.toString`, which writes exponents as `e+21`.
const JS_NUMBER: u128 = lexical_core::NumberFormatBuilder::new()
    .required_exponent_sign(true)
    .build();

/// Options matching JavaScript's float output: integral floats print without a fraction, and
/// scientific notation is only used below `1e-6` and from `1e21` upwards.
fn js_float_options() -> Result<lexical_core::WriteFloatOptions, fmt::Error> {
    lexical_core::WriteFloatOptions::builder()
        .trim_floats(true)
        .negative_exponent_break(NonZeroI32::new(-6))
        .positive_exponent_break(NonZeroI32::new(20))
        .build()
        .map_err(|_| fmt::Error)
}

impl PrintNode for Number {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        use lexical_core::FormattedSize;
        let mut buf = [b'0'; f64::FORMATTED_SIZE_DECIMAL];
        let digits = match *self {
            Number::Int(int) => lexical_core::write(int, &mut buf),
            // -0 prints as 0
            Number::Float(float) if float == 0.0 => lexical_core::write(0, &mut buf),
            Number::Float(float) => lexical_core::write_with_options::<_, JS_NUMBER>(
                float,
                &mut buf,
                &js_float_options()?,
            ),
        };
        buffer.write_str(std::str::from_utf8(digits).map_err(|_| fmt::Error)?)
    }
}

/// Write a string as a JSON-style double quoted literal.
fn write_string(value: &str, buffer: &mut dyn Write) -> fmt::Result {
    buffer.write_char('"')?;
    for c in value.chars() {
        match c {
            '"' => buffer.write_str("\\\"")?,
            '\\' => buffer.write_str(r"\\")?,
            '\n' => buffer.write_str(r"\n")?,
            '\r' => buffer.write_str(r"\r")?,
            '\t' => buffer.write_str(r"\t")?,
            '\u{0008}' => buffer.write_str(r"\b")?,
            '\u{000C}' => buffer.write_str(r"\f")?,
            '\u{0000}'..='\u{001F}' => write!(buffer, "\\u{:04x}", c as u32)?,
            _ => buffer.write_char(c)?,
        };
    }
    buffer.write_char('"')
}

impl PrintNode for Value {
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Value::String(value) => write_string(value, buffer),
            Value::Number(number) => number.write_to_buffer(buffer),
            Value::Boolean(true) => buffer.write_str("true"),
            Value::Boolean(false) => buffer.write_str("false"),
            Value::DateTime(instant) => {
                write!(buffer, "\"{}\"", instant.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            Value::Enum(name) => buffer.write_str(name),
            Value::List(list) => {
                buffer.write_char('[')?;
                let mut first = true;
                for value in list.iter() {
                    if first {
                        first = false;
                    } else {
                        buffer.write_char(',')?;
                    }
                    value.write_to_buffer(buffer)?;
                }
                buffer.write_char(']')
            }
            Value::Object(object) => {
                buffer.write_char('{')?;
                object.write_to_buffer(buffer)?;
                buffer.write_char('}')
            }
        }
    }
}

/// Prints `key:value` pairs joined by commas, without surrounding delimiters.
impl PrintNode for Arguments {
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        let mut first = true;
        for (key, value) in self.iter() {
            if first {
                first = false;
            } else {
                buffer.write_char(',')?;
            }
            buffer.write_str(key)?;
            buffer.write_char(':')?;
            value.write_to_buffer(buffer)?;
        }
        Ok(())
    }
}

impl PrintNode for Field {
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(&self.name)?;
        if !self.arguments.is_empty() {
            buffer.write_char('(')?;
            self.arguments.write_to_buffer(buffer)?;
            buffer.write_char(')')?;
        }
        if self.is_leaf() {
            return Ok(());
        }
        buffer.write_char('{')?;
        let mut first = true;
        for subfield in self.subfields.iter() {
            if first {
                first = false;
            } else {
                buffer.write_char(',')?;
            }
            subfield.write_to_buffer(buffer)?;
        }
        for fragment in self.fragments.iter() {
            if first {
                first = false;
            } else {
                buffer.write_char(',')?;
            }
            write!(buffer, "...{}", fragment)?;
        }
        buffer.write_char('}')
    }
}

impl PrintNode for Operation {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(self.kind().as_str())?;
        buffer.write_char('{')?;
        self.field().write_to_buffer(buffer)?;
        buffer.write_char('}')
    }
}

macro_rules! display_print_node {
    ($($node:ty),*) => {
        $(
            impl fmt::Display for $node {
                #[inline]
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    self.write_to_buffer(f)
                }
            }
        )*
    };
}

display_print_node!(Number, Value, Field, Operation);
