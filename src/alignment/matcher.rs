use crate::types::MatchCandidate;

/// Hard ceiling on the edit budget handed to the DP. Search cost grows with
/// the budget, and a runaway budget is the one latency hazard in the core;
/// with the default 0.2 error rate this only engages past ~320-char lines.
pub(crate) const MAX_ERROR_BUDGET: usize = 64;

/// Finds every substring of `window` within Levenshtein distance `max_dist`
/// of `query` (insertions, deletions, substitutions; no transpositions).
///
/// Offsets in the returned candidates are character offsets into `window`,
/// end exclusive. Neighbouring ends of the same underlying match are reported
/// as separate candidates; picking one is the caller's job.
pub fn find_near_matches(query: &[char], window: &[char], max_dist: usize) -> Vec<MatchCandidate> {
    let q_len = query.len();
    let w_len = window.len();
    if q_len == 0 || w_len == 0 {
        return Vec::new();
    }
    let max_dist = max_dist.min(MAX_ERROR_BUDGET);
    if q_len > w_len + max_dist {
        return Vec::new();
    }

    // Column j holds, per query prefix length i, the cheapest edit distance
    // of query[..i] against any window substring ending at j, plus the start
    // offset of that substring. Row 0 is free so matches may start anywhere.
    let mut prev_dist: Vec<usize> = (0..=q_len).collect();
    let mut prev_start = vec![0usize; q_len + 1];
    let mut curr_dist = vec![0usize; q_len + 1];
    let mut curr_start = vec![0usize; q_len + 1];

    let mut candidates = Vec::new();
    for j in 1..=w_len {
        curr_dist[0] = 0;
        curr_start[0] = j;
        let window_char = window[j - 1];
        for i in 1..=q_len {
            let sub_cost = usize::from(query[i - 1] != window_char);
            let mut best = prev_dist[i - 1] + sub_cost;
            let mut start = prev_start[i - 1];

            // Ties on distance keep the earliest start.
            let skip_window = prev_dist[i] + 1;
            if skip_window < best || (skip_window == best && prev_start[i] < start) {
                best = skip_window;
                start = prev_start[i];
            }
            let skip_query = curr_dist[i - 1] + 1;
            if skip_query < best || (skip_query == best && curr_start[i - 1] < start) {
                best = skip_query;
                start = curr_start[i - 1];
            }

            curr_dist[i] = best;
            curr_start[i] = start;
        }

        if curr_dist[q_len] <= max_dist {
            candidates.push(MatchCandidate {
                start: curr_start[q_len],
                end: j,
                dist: curr_dist[q_len],
            });
        }

        std::mem::swap(&mut prev_dist, &mut curr_dist);
        std::mem::swap(&mut prev_start, &mut curr_start);
    }

    candidates
}
