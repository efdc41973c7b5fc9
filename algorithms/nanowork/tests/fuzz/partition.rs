use bolero::check;
use nanowork::engine::partition::{decode_pixel, encode_pixel, lane_nonce, pixel_lane, Lane};
use nanowork::FrameSeed;

#[test]
fn fuzz_partition_round_trip() {
    check!()
        .with_type::<(u16, u16, [u8; 8])>()
        .for_each(|(x, y, seed)| {
            // Keep tile indices below 255.
            let lane = Lane::new(u32::from(*x) % 65_280, u32::from(*y) % 65_280);
            let seed = FrameSeed(*seed);
            let pixel = encode_pixel(lane);

            assert_ne!(pixel[0], 0, "success marker collides with the sentinel");
            assert_eq!(pixel_lane(pixel), lane);
            assert_eq!(decode_pixel(pixel, &seed), Some(lane_nonce(lane, &seed)));
        });
}
