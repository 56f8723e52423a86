/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format a number without a trailing `.0` for whole values
pub fn format_number(value: f64) -> String {
    let value = round2(value);
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Pixel value as a CSS length, e.g. `20px` or `1.5px`
pub fn px(value: f64) -> String {
    format!("{}px", format_number(value))
}

/// CSS four-sided shorthand, collapsed to one or two values when sides repeat
pub fn shorthand(top: f64, right: f64, bottom: f64, left: f64) -> String {
    if top == right && right == bottom && bottom == left {
        px(top)
    } else if top == bottom && right == left {
        format!("{} {}", px(top), px(right))
    } else {
        format!("{} {} {} {}", px(top), px(right), px(bottom), px(left))
    }
}
