use bitrank::Builder;

fn main() {
    afl::fuzz!(|data: &[u8]| {
        let mut bits = Vec::with_capacity(data.len() * 8);
        for byte in data {
            for i in 0..8 {
                bits.push(byte & (1 << i) != 0);
            }
        }

        // Build once by collecting and once by random-access writes, in
        // reverse so every bit is written out of order.
        let collected = bits.iter().cloned().collect::<Builder>().build();
        let mut builder = Builder::new(bits.len() as u64);
        for (i, &bit) in bits.iter().enumerate().rev() {
            builder.set(i as u64, !bit);
            builder.set(i as u64, bit);
        }
        let written = builder.build();
        assert_eq!(collected, written);

        let mut one_rank = 0;
        let mut zero_rank = 0;

        for (i, &bit) in bits.iter().enumerate() {
            let i = i as u64;
            assert_eq!(collected.get(i), Ok(bit));
            assert_eq!(collected.rank(i, false), Ok(zero_rank));
            assert_eq!(collected.rank(i, true), Ok(one_rank));

            if bit {
                assert_eq!(collected.select(one_rank, true), Ok(i));
                one_rank += 1;
            } else {
                assert_eq!(collected.select(zero_rank, false), Ok(i));
                zero_rank += 1;
            }
        }

        let len = bits.len() as u64;
        assert!(collected.get(len).is_err());
        assert!(collected.rank1(len).is_err());
        for rank in one_rank..len + 1 {
            assert!(collected.select(rank, true).is_err());
        }
        for rank in zero_rank..len + 1 {
            assert!(collected.select(rank, false).is_err());
        }
    });
}
