#![no_main]

use libfuzzer_sys::fuzz_target;
use ratechart::loader::SampleTable;
use ratechart::summary::RateSummary;
use ratechart::transform::RateTable;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must either load or fail with an error, never panic
    if let Ok(samples) = SampleTable::from_reader(data) {
        let table = RateTable::from_samples(&samples).expect("derived column matches schema");
        assert_eq!(table.len(), samples.len());
        let _ = RateSummary::from_table(&table);
    }
});
