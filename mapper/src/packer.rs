//! The block packer: scans an occupancy image and emits consolidated
//! byte-range tags.

use kepgen_dsl::tag::ConsolidatedTag;
use log::debug;

use crate::image::{OccupancyImage, IMAGE_LEN};

/// Packs the contiguous occupied runs of `image` into consolidated tags.
///
/// The scan walks candidate starting addresses left to right. At an
/// occupied address a run begins: the cursor jumps forward by the width
/// recorded at its current position, continuing while the cursor is
/// still below `block_size` before the jump. The last jump may carry the
/// run past `block_size` by up to one item's width; the overrun is
/// accepted. The outer scan resumes immediately after the consumed run,
/// so tags are non-overlapping and strictly increasing in start byte.
pub fn pack(image: &OccupancyImage, label: &str, block_size: usize) -> Vec<ConsolidatedTag> {
    let mut tags = Vec::new();
    if block_size == 0 || block_size >= IMAGE_LEN {
        return tags;
    }

    let mut start = 0;
    while start < IMAGE_LEN - block_size {
        if image.get(start) == 0 {
            start += 1;
            continue;
        }

        let mut cursor = 0;
        while cursor < block_size && image.get(start + cursor) > 0 {
            cursor += image.get(start + cursor) as usize;
        }

        tags.push(ConsolidatedTag {
            area: label.to_string(),
            start,
            size: cursor,
        });
        start += cursor;
    }

    debug!("Packed {} tags for area {}", tags.len(), label);
    tags
}
