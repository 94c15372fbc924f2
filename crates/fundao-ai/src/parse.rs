use crate::LeaderboardEntry;

/// Lenient entry shape for model replies: missing fields are tolerated here
/// and filtered or defaulted during validation.
#[derive(serde::Deserialize)]
struct RawEntry {
    member: Option<String>,
    #[serde(rename = "trustScore")]
    trust_score: Option<f64>,
    rank: Option<u32>,
    perks: Option<String>,
    badges: Option<Vec<String>>,
}

#[derive(serde::Deserialize)]
struct RawLeaderboard {
    leaderboard: Vec<RawEntry>,
}

#[derive(serde::Deserialize)]
struct RawSummary {
    summary: String,
}

/// Parse and validate a raw leaderboard reply.
///
/// Entries without a member name or numeric score are dropped; survivors are
/// ordered by the model's rank (score as tiebreak), truncated to `cap`, and
/// renumbered 1..=n so ranks always form a contiguous ascending run.
pub fn parse_leaderboard(raw: &str, cap: u32) -> Result<Vec<LeaderboardEntry>, String> {
    if cap == 0 {
        return Ok(vec![]);
    }

    let json = extract_json(raw).ok_or_else(|| "reply contained no JSON".to_string())?;
    let mut entries = collect_entries(&json);

    // A stray brace in surrounding prose can shadow the real array; retry
    // with the array span before giving up.
    if entries.is_empty() {
        if let Some(array) = extract_array(raw) {
            if array != json {
                entries = collect_entries(&array);
            }
        }
    }

    if entries.is_empty() {
        return Err("reply contained no usable leaderboard entries".to_string());
    }

    entries.sort_by(|a, b| {
        a.rank.cmp(&b.rank).then(
            b.trust_score
                .partial_cmp(&a.trust_score)
                .unwrap_or(std::cmp::Ordering::Equal),
        )
    });
    entries.truncate(cap as usize);
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = i as u32 + 1;
    }

    Ok(entries)
}

fn collect_entries(json: &str) -> Vec<LeaderboardEntry> {
    raw_entries(json)
        .into_iter()
        .filter_map(validate_entry)
        .collect()
}

fn validate_entry(raw: RawEntry) -> Option<LeaderboardEntry> {
    let member = raw.member?.trim().to_string();
    if member.is_empty() {
        return None;
    }
    Some(LeaderboardEntry {
        member,
        trust_score: raw.trust_score?,
        // Unranked entries sort last; ranks are renumbered afterwards anyway.
        rank: raw.rank.unwrap_or(u32::MAX),
        perks: raw.perks.unwrap_or_default(),
        badges: raw.badges.unwrap_or_default(),
    })
}

/// Try the schema'd object first, then a bare array, then object-by-object
/// extraction from a malformed array.
fn raw_entries(json: &str) -> Vec<RawEntry> {
    if let Ok(wrapper) = serde_json::from_str::<RawLeaderboard>(json) {
        return wrapper.leaderboard;
    }
    if let Ok(entries) = serde_json::from_str::<Vec<RawEntry>>(json) {
        return entries;
    }
    parse_objects(json)
}

/// Parse individual `{...}` objects out of a malformed JSON array by brace
/// matching.
fn parse_objects(json: &str) -> Vec<RawEntry> {
    let inner = json.trim();
    let inner = inner.strip_prefix('[').unwrap_or(inner);
    let inner = inner.strip_suffix(']').unwrap_or(inner);

    let mut entries = Vec::new();
    let mut depth = 0;
    let mut start = None;

    for (i, ch) in inner.char_indices() {
        match ch {
            '{' => {
                if depth == 0 {
                    start = Some(i);
                }
                depth += 1;
            }
            '}' => {
                depth -= 1;
                if depth == 0 {
                    if let Some(s) = start {
                        if let Ok(entry) = serde_json::from_str::<RawEntry>(&inner[s..=i]) {
                            entries.push(entry);
                        }
                    }
                    start = None;
                }
            }
            _ => {}
        }
    }

    entries
}

/// Parse a summary reply: the instructed JSON wrapper when present, otherwise
/// the raw text (code fences stripped). An empty reply is an error.
pub fn parse_summary(raw: &str) -> Result<String, String> {
    if let Some(json) = extract_json(raw) {
        if let Ok(reply) = serde_json::from_str::<RawSummary>(&json) {
            // The instructed wrapper is authoritative once it parses.
            let summary = reply.summary.trim();
            return if summary.is_empty() {
                Err("model returned an empty summary".to_string())
            } else {
                Ok(summary.to_string())
            };
        }
    }

    let text = strip_fences(raw);
    if text.is_empty() {
        Err("model returned an empty summary".to_string())
    } else {
        Ok(text.to_string())
    }
}

/// Extract the outermost JSON object or array substring from raw LLM output.
fn extract_json(raw: &str) -> Option<String> {
    let (start, close) = match (raw.find('{'), raw.find('[')) {
        (Some(o), Some(a)) if o < a => (o, '}'),
        (Some(o), None) => (o, '}'),
        (_, Some(a)) => (a, ']'),
        (None, None) => return None,
    };
    let end = raw.rfind(close)?;
    if end <= start {
        return None;
    }
    Some(raw[start..=end].to_string())
}

/// Extract the outermost array substring, ignoring any objects around it.
fn extract_array(raw: &str) -> Option<String> {
    let start = raw.find('[')?;
    let end = raw.rfind(']')?;
    if end <= start {
        return None;
    }
    Some(raw[start..=end].to_string())
}

fn strip_fences(raw: &str) -> String {
    raw.lines()
        .filter(|line| !line.trim_start().starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
