use flexi_logger::Logger;
use log::info;
use lru_set::BoundedSet;

/// How many message ids are remembered when no capacity is given
const DEFAULT_SEEN_CAPACITY: usize = 4;

/// Deduplicates a stream of gossip message ids, keeping only recently seen ones
fn main() -> Result<(), anyhow::Error> {
    let _logger = Logger::try_with_str("trace")?.start()?;

    let capacity = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => DEFAULT_SEEN_CAPACITY,
    };
    let mut seen = BoundedSet::new(capacity);

    let incoming = [1u64, 2, 3, 1, 4, 5, 2, 6, 1, 3];
    for id in incoming {
        if seen.contains(&id) {
            info!("Dropping duplicate message {id}");
            continue;
        }
        seen.add(id);
        info!("Relaying message {id}");
    }

    info!("Remembered ids (oldest first): {:?}", seen.iter().collect::<Vec<_>>());
    Ok(())
}
