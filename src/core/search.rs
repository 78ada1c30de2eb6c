use super::models::Card;

/// Case-insensitive substring filter over both card faces. An empty
/// query matches everything; result order is deck order.
pub fn search<'deck>(cards: &'deck [Card], query: &str) -> Vec<&'deck Card> {
    if query.is_empty() {
        return cards.iter().collect();
    }

    let needle = query.to_lowercase();
    cards
        .iter()
        .filter(|card| {
            card.front.to_lowercase().contains(&needle)
                || card.back.to_lowercase().contains(&needle)
        })
        .collect()
}
