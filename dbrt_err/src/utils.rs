use backtrace::Backtrace;
use rustc_demangle::demangle;

fn short_symbol_name(raw : &'_ str) -> String {
    let de = demangle(raw).to_string();
    let parts : Vec<&str> = de.as_str().split("::").collect();

    // the mangled tail segment is a hash like h9f3c..., drop it
    if parts.len() >= 2 && parts.last().unwrap().starts_with('h') {
        return parts[parts.len() - 2].to_string();
    }

    match parts.last() {
        Some(last) => last.to_string(),
        None => String::from(""),
    }
}

pub(crate) fn get_source_func_name(idx : usize) -> String {
    let mut bt = Backtrace::new_unresolved();
    bt.resolve();

    if let Some(frame) = bt.frames().get(idx) {
        for symbol in frame.symbols() {
            if let Some(name) = symbol.name() {
                if let Some(raw) = name.as_str() {
                    return short_symbol_name(raw);
                }
            }
        }
    }

    String::from("")
}
