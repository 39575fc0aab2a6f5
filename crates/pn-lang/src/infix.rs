use crate::op::OpKind;

/// Renders a prefix token sequence as fully parenthesized infix text using a
/// right-to-left stack scan.
///
/// Operands push verbatim; an operator pops two entries and pushes
/// `"(lhs op rhs)"`. A pop from an empty stack (an operator short of
/// operands) renders the missing side as an empty string, no placeholder.
pub(crate) fn from_prefix_tokens(tokens: &[&str]) -> String {
    let mut stack: Vec<String> = Vec::with_capacity(tokens.len());

    for token in tokens.iter().rev() {
        match OpKind::from_symbol(token) {
            Some(kind) => {
                let lhs = stack.pop().unwrap_or_default();
                let rhs = stack.pop().unwrap_or_default();
                stack.push(format!("({} {} {})", lhs, kind, rhs));
            }
            None => stack.push((*token).to_string()),
        }
    }

    stack.pop().unwrap_or_default()
}
