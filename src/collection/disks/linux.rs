//! Based on [heim's implementation](https://github.com/heim-rs/heim/blob/master/heim-disk/src/sys/linux/counters.rs).

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    num::ParseIntError,
    path::PathBuf,
    time::Instant,
};

use super::{DeviceSample, Sampler};

/// Copied from the `psutil` sources:
///
/// "man iostat" states that sectors are equivalent with blocks and have
/// a size of 512 bytes. Despite this value can be queried at runtime
/// via /sys/block/{DISK}/queue/hw_sector_size and results may vary
/// between 1k, 2k, or 4k... 512 appears to be a magic constant used
/// throughout Linux source code:
/// * <https://stackoverflow.com/a/38136179/376587>
/// * <https://lists.gt.net/linux/kernel/2241060>
/// * <https://github.com/giampaolo/psutil/issues/1305>
/// * <https://github.com/torvalds/linux/blob/4f671fe2f9523a1ea206f63fe60a7c7b3a56d5c7/include/linux/bio.h#L99>
/// * <https://lkml.org/lkml/2015/8/17/234>
const DISK_SECTOR_SIZE: u64 = 512;

const PROC_DISKSTATS: &str = "/proc/diskstats";

/// Parses a single `/proc/diskstats` line into a [`DeviceSample`].
///
/// Follows the format used in Linux 2.6+. Note that this completely ignores
/// the following stats:
/// - Time spent and in-flight counts
/// - Discard stats from 4.18+
/// - Flush stats from 5.5+
///
/// <https://www.kernel.org/doc/Documentation/iostats.txt>
/// <https://www.kernel.org/doc/Documentation/ABI/testing/procfs-diskstats>
fn parse_diskstats_line(line: &str, timestamp: Instant) -> anyhow::Result<DeviceSample> {
    fn next_part<'a>(iter: &mut impl Iterator<Item = &'a str>) -> Result<&'a str, io::Error> {
        iter.next()
            .ok_or_else(|| io::Error::from(io::ErrorKind::InvalidData))
    }

    fn next_part_to_u64<'a>(iter: &mut impl Iterator<Item = &'a str>) -> anyhow::Result<u64> {
        next_part(iter)?
            .parse()
            .map_err(|err: ParseIntError| err.into())
    }

    // Skip the major and minor numbers.
    let mut parts = line.split_whitespace().skip(2);

    let name = next_part(&mut parts)?.to_string();

    let read_ops = next_part_to_u64(&mut parts)?;

    // Skip read merged count.
    let mut parts = parts.skip(1);
    let read_bytes = next_part_to_u64(&mut parts)?.saturating_mul(DISK_SECTOR_SIZE);

    // Skip read time.
    let mut parts = parts.skip(1);
    let write_ops = next_part_to_u64(&mut parts)?;

    // Skip write merged count.
    let mut parts = parts.skip(1);
    let write_bytes = next_part_to_u64(&mut parts)?.saturating_mul(DISK_SECTOR_SIZE);

    Ok(DeviceSample::new(
        name,
        read_bytes,
        write_bytes,
        read_ops,
        write_ops,
        timestamp,
    ))
}

/// Reads disk I/O counters from `/proc/diskstats`.
#[derive(Debug)]
pub struct DiskstatsSampler {
    path: PathBuf,
    line: String,
}

impl Default for DiskstatsSampler {
    fn default() -> Self {
        Self::with_path(PROC_DISKSTATS)
    }
}

impl DiskstatsSampler {
    /// Creates a sampler that reads a diskstats-formatted file at `path`.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            line: String::new(),
        }
    }
}

impl Sampler for DiskstatsSampler {
    fn sample(&mut self) -> anyhow::Result<Vec<DeviceSample>> {
        let mut results = vec![];
        let mut reader = BufReader::new(File::open(&self.path)?);
        let timestamp = Instant::now();

        self.line.clear();

        // This saves us from doing a string allocation on each iteration compared to
        // `lines()`.
        while reader.read_line(&mut self.line)? > 0 {
            match parse_diskstats_line(&self.line, timestamp) {
                Ok(sample) => results.push(sample),
                Err(err) => log::debug!("skipping diskstats line {:?}: {err}", self.line.trim()),
            }
            self.line.clear();
        }

        Ok(results)
    }
}
