/// positional template formatting. `{0}` `{1}` markers are replaced left to right
/// by the parameter at that index, `{{` and `}}` are literal braces, replaced text
/// is not scanned again. markers with no matching parameter stay verbatim.
pub fn format_template(template : &'_ str, params : &'_ [&'_ str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    out.push('{');
                    continue;
                }

                let mut digits = String::new();
                let mut closed = false;
                while let Some(&next) = chars.peek() {
                    if next.is_ascii_digit() {
                        digits.push(next);
                        chars.next();
                    } else if next == '}' {
                        chars.next();
                        closed = true;
                        break;
                    } else {
                        break;
                    }
                }

                if closed && !digits.is_empty() {
                    let idx = digits.parse::<usize>();
                    match idx.ok().and_then(|i| params.get(i)) {
                        Some(p) => out.push_str(p),
                        None => {
                            out.push('{');
                            out.push_str(digits.as_str());
                            out.push('}');
                        }
                    }
                } else {
                    out.push('{');
                    out.push_str(digits.as_str());
                    if closed {
                        out.push('}');
                    }
                }
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                }
                out.push('}');
            }
            _ => out.push(c),
        }
    }

    out
}
