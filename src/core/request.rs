use std::fmt;

/// Identifies one issued backend request within a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic request counter owned by a component.
///
/// Overlapping fetches are not cancelled; instead each response is checked
/// against the latest issued id and dropped if it has been superseded.
#[derive(Debug, Default, Clone)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> RequestId {
        self.latest += 1;
        RequestId(self.latest)
    }

    pub fn is_current(&self, id: RequestId) -> bool {
        self.latest != 0 && id.0 == self.latest
    }

    pub fn latest(&self) -> Option<RequestId> {
        (self.latest != 0).then_some(RequestId(self.latest))
    }
}
