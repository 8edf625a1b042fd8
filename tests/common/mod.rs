#![allow(dead_code)]

use patterns_demo::interfaces::console::Terminal;

/// Feeds `input` to a flow through an in-memory terminal and returns
/// everything it printed along with the flow's result.
pub fn run_scripted<T, F>(input: &str, flow: F) -> (T, String)
where
    F: FnOnce(&mut Terminal<&[u8], Vec<u8>>) -> T,
{
    colored::control::set_override(false);
    let mut terminal = Terminal::new(input.as_bytes(), Vec::new());
    let result = flow(&mut terminal);
    let output = String::from_utf8(terminal.into_output()).expect("output is UTF-8");
    (result, output)
}

/// Builds a stdin script: one answer per line.
pub fn script(answers: &[&str]) -> String {
    answers.iter().map(|a| format!("{a}\n")).collect()
}
