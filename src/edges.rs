use regex::Regex;

/// Parses edges written as pairs, e.g. `"(0,1), (1,2), (3,1)"`, optionally
/// wrapped in one pair of brackets.
pub fn parse_edges_string(s: &str) -> Result<Vec<(usize, usize)>, &'static str> {
    let s_no_whitespace: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    if s_no_whitespace.is_empty() || s_no_whitespace == "[]" || s_no_whitespace == "()" {
        return Ok(Vec::new());
    }
    let re = Regex::new(
        r"^[\(\[]?(\((0|[1-9][0-9]*),(0|[1-9][0-9]*)\),)*\((0|[1-9][0-9]*),(0|[1-9][0-9]*)\)[\)\]]?$",
    )
    .map_err(|_| "Invalid edge pattern.")?;
    if !re.is_match(&s_no_whitespace) {
        return Err("Can't parse edges.");
    }
    let numbers = s_no_whitespace
        .split(|c: char| !c.is_ascii_digit())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<usize>())
        .collect::<Result<Vec<usize>, _>>()
        .map_err(|_| "Node index too large.")?;
    Ok(numbers.chunks(2).map(|s| (s[0], s[1])).collect())
}
