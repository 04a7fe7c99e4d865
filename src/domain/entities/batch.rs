//! Domain batches sent to Apollo as a single saved search.

/// Largest number of domains Apollo accepts in one saved query.
pub const MAX_BATCH_SIZE: usize = 9_000;

/// An ordered chunk of domains processed as one unit.
///
/// `number` is 1-based and reflects the batch position within the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub number: usize,
    pub domains: Vec<String>,
}

impl Batch {
    pub fn new(number: usize, domains: Vec<String>) -> Self {
        Self { number, domains }
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

/// Splits domains into consecutive batches of `size`.
///
/// Every batch holds exactly `size` domains except possibly the last one.
/// Concatenating the batches in order yields the input. A `size` of zero is
/// treated as one.
///
/// # Examples
///
/// ```
/// use apollo_batch_links::domain::entities::chunk_domains;
///
/// let domains = vec!["a.com".to_string(), "b.com".to_string(), "c.com".to_string()];
/// let batches = chunk_domains(domains, 2);
///
/// assert_eq!(batches.len(), 2);
/// assert_eq!(batches[1].number, 2);
/// assert_eq!(batches[1].domains, vec!["c.com".to_string()]);
/// ```
pub fn chunk_domains(domains: Vec<String>, size: usize) -> Vec<Batch> {
    let size = size.max(1);
    let mut batches = Vec::with_capacity(domains.len().div_ceil(size));
    let mut remaining = domains.into_iter().peekable();

    while remaining.peek().is_some() {
        let chunk: Vec<String> = remaining.by_ref().take(size).collect();
        batches.push(Batch::new(batches.len() + 1, chunk));
    }

    batches
}
