// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! `condition:token,token;condition:token` lists used for class toggling.
//!
//! Each `;`-separated segment pairs a literal boolean with comma-separated
//! tokens. A segment without a colon, or whose condition is not exactly
//! `true` or `false`, is skipped.

use super::scalar::parse_flag;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalSegment {
    pub condition: bool,
    pub tokens: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionalList {
    pub segments: Vec<ConditionalSegment>,
    /// Segments that were skipped, verbatim, for diagnostics.
    pub malformed: Vec<String>,
}

impl ConditionalList {
    /// Tokens from every segment whose condition equals `polarity`, in order.
    pub fn tokens_for(&self, polarity: bool) -> Vec<String> {
        self.segments
            .iter()
            .filter(|segment| segment.condition == polarity)
            .flat_map(|segment| segment.tokens.iter().cloned())
            .collect()
    }
}

pub fn parse(input: &str) -> ConditionalList {
    let mut list = ConditionalList::default();

    for raw in input.split(';') {
        let segment = raw.trim();
        if segment.is_empty() {
            continue;
        }

        let Some((condition, tokens)) = segment.split_once(':') else {
            list.malformed.push(segment.to_string());
            continue;
        };

        let Some(condition) = parse_flag(condition) else {
            list.malformed.push(segment.to_string());
            continue;
        };

        let tokens = tokens
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        list.segments.push(ConditionalSegment { condition, tokens });
    }

    list
}

/// Parse `input` and return the tokens selected for `polarity`.
///
/// # Example
/// ```
/// use the_tagsmith::grammar::conditional_list::select_tokens;
///
/// assert_eq!(select_tokens("true:featured,highlighted", true), vec!["featured", "highlighted"]);
/// assert!(select_tokens("true:disabled,loading", false).is_empty());
/// ```
pub fn select_tokens(input: &str, polarity: bool) -> Vec<String> {
    parse(input).tokens_for(polarity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_tokens_table_driven() {
        struct TestCase {
            name: &'static str,
            input: &'static str,
            polarity: bool,
            expected: Vec<&'static str>,
        }

        let test_cases = vec![
            TestCase {
                name: "class-if with true condition",
                input: "true:featured,highlighted",
                polarity: true,
                expected: vec!["featured", "highlighted"],
            },
            TestCase {
                name: "class-unless with true condition",
                input: "true:disabled,loading",
                polarity: false,
                expected: vec![],
            },
            TestCase {
                name: "class-unless with false condition",
                input: "false:enabled",
                polarity: false,
                expected: vec!["enabled"],
            },
            TestCase {
                name: "mixed segments keep document order",
                input: "true:a,b;false:c;true:d",
                polarity: true,
                expected: vec!["a", "b", "d"],
            },
            TestCase {
                name: "duplicates are preserved",
                input: "true:a;true:a",
                polarity: true,
                expected: vec!["a", "a"],
            },
            TestCase {
                name: "tokens and segments are trimmed",
                input: " true : a , b ; false:c ",
                polarity: true,
                expected: vec!["a", "b"],
            },
            TestCase {
                name: "condition is case-sensitive",
                input: "True:a;TRUE:b;true:c",
                polarity: true,
                expected: vec!["c"],
            },
            TestCase {
                name: "segment without colon is skipped",
                input: "featured;true:ok",
                polarity: true,
                expected: vec!["ok"],
            },
            TestCase {
                name: "non-boolean condition is skipped",
                input: "1:a;yes:b;maybe:c",
                polarity: true,
                expected: vec![],
            },
            TestCase {
                name: "empty input",
                input: "",
                polarity: true,
                expected: vec![],
            },
            TestCase {
                name: "empty tokens are dropped",
                input: "true:a,,b,",
                polarity: true,
                expected: vec!["a", "b"],
            },
        ];

        for tc in test_cases {
            assert_eq!(
                select_tokens(tc.input, tc.polarity),
                tc.expected,
                "Failed: {}",
                tc.name
            );
        }
    }

    #[test]
    fn test_malformed_segments_are_recorded() {
        let list = parse("true:a;nocolon;maybe:b");
        assert_eq!(list.segments.len(), 1);
        assert_eq!(list.malformed, vec!["nocolon", "maybe:b"]);
    }

    #[test]
    fn test_segment_included_iff_polarity_matches() {
        let inputs = ["true:x", "false:x", "true:x;false:y", "bogus:x", "x"];
        for input in inputs {
            let list = parse(input);
            for polarity in [true, false] {
                let selected = list.tokens_for(polarity);
                let expected: Vec<String> = list
                    .segments
                    .iter()
                    .filter(|s| s.condition == polarity)
                    .flat_map(|s| s.tokens.clone())
                    .collect();
                assert_eq!(selected, expected, "input {:?}", input);
                assert!(!selected.iter().any(|t| t.contains(':')));
            }
        }
    }
}
