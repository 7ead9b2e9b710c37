//! Record output must not depend on how the input is split into reads.

use std::io::{self, Read};

use catalog_ingest::{ReaderOptions, read_records};
use proptest::prelude::*;

const CATALOG: &str = include_str!("data/xcri.xml");

/// Reader that hands out the input in a fixed cycle of short reads.
struct ChunkedReader<'a> {
    data: &'a [u8],
    sizes: Vec<usize>,
    calls: usize,
}

impl Read for ChunkedReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.data.is_empty() {
            return Ok(0);
        }
        let limit = self.sizes[self.calls % self.sizes.len()];
        self.calls += 1;
        let n = limit.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn chunk_boundaries_do_not_change_records(
        sizes in prop::collection::vec(1usize..=32, 1..8),
        buffer_size in 1usize..=64,
    ) {
        let baseline = read_records(CATALOG.as_bytes(), &ReaderOptions::default())
            .expect("baseline read");
        let input = ChunkedReader { data: CATALOG.as_bytes(), sizes, calls: 0 };
        let options = ReaderOptions::default().with_buffer_size(buffer_size);
        let chunked = read_records(input, &options).expect("chunked read");

        prop_assert_eq!(chunked.len(), 4);
        prop_assert_eq!(chunked, baseline);
    }
}
