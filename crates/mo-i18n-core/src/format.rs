use alloc::format;
use alloc::string::{String, ToString};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg<'a> {
    Str(&'a str),
    Int(i64),
    UInt(u64),
}

impl<'a> From<&'a str> for FormatArg<'a> {
    fn from(value: &'a str) -> Self {
        FormatArg::Str(value)
    }
}

impl<'a> From<&'a String> for FormatArg<'a> {
    fn from(value: &'a String) -> Self {
        FormatArg::Str(value.as_str())
    }
}

impl From<i32> for FormatArg<'_> {
    fn from(value: i32) -> Self {
        FormatArg::Int(i64::from(value))
    }
}

impl From<i64> for FormatArg<'_> {
    fn from(value: i64) -> Self {
        FormatArg::Int(value)
    }
}

impl From<u32> for FormatArg<'_> {
    fn from(value: u32) -> Self {
        FormatArg::UInt(u64::from(value))
    }
}

impl From<u64> for FormatArg<'_> {
    fn from(value: u64) -> Self {
        FormatArg::UInt(value)
    }
}

impl From<usize> for FormatArg<'_> {
    fn from(value: usize) -> Self {
        FormatArg::UInt(value as u64)
    }
}

#[derive(Default)]
struct Spec {
    left_align: bool,
    zero_pad: bool,
    width: usize,
}

pub fn format_message(template: &str, args: &[FormatArg<'_>]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut chars = template.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        if ch != '%' {
            output.push(ch);
            continue;
        }
        if chars.next_if(|&(_, next)| next == '%').is_some() {
            output.push('%');
            continue;
        }

        let mut spec = Spec::default();
        while let Some((_, flag)) = chars.next_if(|&(_, next)| next == '-' || next == '0') {
            match flag {
                '-' => spec.left_align = true,
                _ => spec.zero_pad = true,
            }
        }
        while let Some((_, digit)) = chars.next_if(|&(_, next)| next.is_ascii_digit()) {
            let digit = digit.to_digit(10).unwrap_or(0) as usize;
            spec.width = spec.width.saturating_mul(10).saturating_add(digit);
        }
        while chars.next_if(|&(_, next)| matches!(next, 'h' | 'l' | 'z')).is_some() {}

        let Some((end, conversion)) = chars.next() else {
            output.push_str(&template[start..]);
            break;
        };
        let rendered = match conversion {
            's' => args.next().map(render_str),
            'd' | 'i' => args.next().map(render_signed),
            'u' => args.next().map(render_unsigned),
            'x' => args.next().map(|arg| render_hex(arg, false)),
            'X' => args.next().map(|arg| render_hex(arg, true)),
            _ => {
                output.push_str(&template[start..end + conversion.len_utf8()]);
                continue;
            }
        };
        let numeric = conversion != 's';
        pad_into(&mut output, &rendered.unwrap_or_default(), &spec, numeric);
    }
    output
}

fn render_str(arg: &FormatArg<'_>) -> String {
    match arg {
        FormatArg::Str(value) => (*value).to_string(),
        FormatArg::Int(value) => value.to_string(),
        FormatArg::UInt(value) => value.to_string(),
    }
}

fn render_signed(arg: &FormatArg<'_>) -> String {
    match arg {
        FormatArg::Int(value) => value.to_string(),
        FormatArg::UInt(value) => (*value as i64).to_string(),
        FormatArg::Str(value) => (*value).to_string(),
    }
}

fn render_unsigned(arg: &FormatArg<'_>) -> String {
    match arg {
        FormatArg::Int(value) => (*value as u64).to_string(),
        FormatArg::UInt(value) => value.to_string(),
        FormatArg::Str(value) => (*value).to_string(),
    }
}

fn render_hex(arg: &FormatArg<'_>, upper: bool) -> String {
    let value = match arg {
        FormatArg::Int(value) => *value as u64,
        FormatArg::UInt(value) => *value,
        FormatArg::Str(value) => return (*value).to_string(),
    };
    if upper {
        format!("{value:X}")
    } else {
        format!("{value:x}")
    }
}

fn pad_into(output: &mut String, value: &str, spec: &Spec, numeric: bool) {
    let len = value.chars().count();
    if len >= spec.width {
        output.push_str(value);
        return;
    }
    let fill = spec.width - len;
    if spec.left_align {
        output.push_str(value);
        output.extend(core::iter::repeat_n(' ', fill));
    } else if spec.zero_pad && numeric {
        let (sign, digits) = match value.strip_prefix('-') {
            Some(digits) => ("-", digits),
            None => ("", value),
        };
        output.push_str(sign);
        output.extend(core::iter::repeat_n('0', fill));
        output.push_str(digits);
    } else {
        output.extend(core::iter::repeat_n(' ', fill));
        output.push_str(value);
    }
}
