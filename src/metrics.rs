//! Performance metrics and statistics tracking for the classifier.

use crate::types::Classification;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use std::time::{Duration, Instant};
use tracing::info;

/// Metrics collector for classification throughput and latency
pub struct ClassifierMetrics {
    /// Total texts classified
    pub texts_classified: AtomicU64,
    /// Texts classified as UPI transactions
    pub transactions_detected: AtomicU64,
    /// Processing times (in microseconds)
    processing_times: RwLock<Vec<u64>>,
    /// Confidence distribution buckets
    confidence_buckets: RwLock<[u64; 10]>,
    /// Start time for rate calculation
    start_time: Instant,
}

impl ClassifierMetrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self {
            texts_classified: AtomicU64::new(0),
            transactions_detected: AtomicU64::new(0),
            processing_times: RwLock::new(Vec::with_capacity(1000)),
            confidence_buckets: RwLock::new([0; 10]),
            start_time: Instant::now(),
        }
    }

    /// Record a completed classification
    pub fn record_classification(&self, processing_time: Duration, result: &Classification) {
        self.texts_classified.fetch_add(1, Ordering::Relaxed);
        if result.is_transaction {
            self.transactions_detected.fetch_add(1, Ordering::Relaxed);
        }

        if let Ok(mut times) = self.processing_times.write() {
            times.push(processing_time.as_micros() as u64);
            // Keep only last 10000 for memory efficiency
            if times.len() > 10000 {
                times.drain(0..5000);
            }
        }

        let bucket = (result.confidence as f64 * 10.0).min(9.0) as usize;
        if let Ok(mut buckets) = self.confidence_buckets.write() {
            buckets[bucket] += 1;
        }
    }

    /// Get processing time statistics
    pub fn get_processing_stats(&self) -> ProcessingStats {
        let times = self.processing_times.read().unwrap();
        if times.is_empty() {
            return ProcessingStats::default();
        }

        let mut sorted: Vec<u64> = times.clone();
        sorted.sort();

        let sum: u64 = sorted.iter().sum();
        let count = sorted.len();

        ProcessingStats {
            count: count as u64,
            mean_us: sum / count as u64,
            p50_us: sorted[count / 2],
            p95_us: sorted[(count as f64 * 0.95) as usize],
            p99_us: sorted[(count as f64 * 0.99) as usize],
            max_us: *sorted.last().unwrap_or(&0),
        }
    }

    /// Get current throughput (texts per second)
    pub fn get_throughput(&self) -> f64 {
        let elapsed = self.start_time.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.texts_classified.load(Ordering::Relaxed) as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Get confidence distribution
    pub fn get_confidence_distribution(&self) -> [u64; 10] {
        *self.confidence_buckets.read().unwrap()
    }

    /// Print summary statistics
    pub fn print_summary(&self) {
        let text_count = self.texts_classified.load(Ordering::Relaxed);
        let tx_count = self.transactions_detected.load(Ordering::Relaxed);
        let tx_rate = if text_count > 0 {
            (tx_count as f64 / text_count as f64) * 100.0
        } else {
            0.0
        };

        let processing = self.get_processing_stats();
        let throughput = self.get_throughput();
        let confidence_dist = self.get_confidence_distribution();

        info!(
            texts = text_count,
            transactions = tx_count,
            transaction_rate = format!("{:.1}%", tx_rate),
            throughput = format!("{:.1} texts/s", throughput),
            "Classification summary"
        );
        info!(
            mean_us = processing.mean_us,
            p50_us = processing.p50_us,
            p95_us = processing.p95_us,
            p99_us = processing.p99_us,
            "Processing time (μs)"
        );

        let total: u64 = confidence_dist.iter().sum();
        for (i, &count) in confidence_dist.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let pct = if total > 0 {
                (count as f64 / total as f64) * 100.0
            } else {
                0.0
            };
            info!(
                "confidence {:.1}-{:.1}: {} ({:.1}%)",
                i as f64 / 10.0,
                (i + 1) as f64 / 10.0,
                count,
                pct
            );
        }
    }
}

impl Default for ClassifierMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Processing time statistics
#[derive(Debug, Default)]
pub struct ProcessingStats {
    pub count: u64,
    pub mean_us: u64,
    pub p50_us: u64,
    pub p95_us: u64,
    pub p99_us: u64,
    pub max_us: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_recording() {
        let metrics = ClassifierMetrics::new();

        metrics.record_classification(
            Duration::from_micros(100),
            &Classification::from_confidence(0.9),
        );
        metrics.record_classification(
            Duration::from_micros(200),
            &Classification::from_confidence(0.2),
        );

        assert_eq!(metrics.texts_classified.load(Ordering::Relaxed), 2);
        assert_eq!(metrics.transactions_detected.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_confidence_buckets() {
        let metrics = ClassifierMetrics::new();

        metrics.record_classification(
            Duration::from_micros(50),
            &Classification::from_confidence(0.95),
        );
        metrics.record_classification(
            Duration::from_micros(50),
            &Classification::from_confidence(0.05),
        );

        let dist = metrics.get_confidence_distribution();
        assert_eq!(dist[9], 1);
        assert_eq!(dist[0], 1);
    }

    #[test]
    fn test_processing_stats() {
        let metrics = ClassifierMetrics::new();

        for us in [100, 200, 300] {
            metrics.record_classification(
                Duration::from_micros(us),
                &Classification::from_confidence(0.5),
            );
        }

        let stats = metrics.get_processing_stats();
        assert_eq!(stats.count, 3);
        assert_eq!(stats.mean_us, 200);
        assert_eq!(stats.max_us, 300);
    }
}
