// Prize pots for 3, 4, 5, 6 and 6 + bonus matches
pub const PRIZE_POTS: [u32; 5] = [25, 100, 1000, 10000, 100000];

const MIN_WINNING_MATCHES: usize = 3;

/// Prize pot for a match count. Seven matches is only possible with lucky dip,
/// which hands the player the bonus ball too.
pub fn prize_for(matches: usize) -> Option<u32> {
    matches
        .checked_sub(MIN_WINNING_MATCHES)
        .and_then(|idx| PRIZE_POTS.get(idx))
        .copied()
}
