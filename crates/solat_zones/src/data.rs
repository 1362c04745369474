//! Embedded zone table: Malaysian cities with coordinates.
//!
//! Rows are grouped by state and sorted by city within each state.
//! Coordinates are decimal degrees, north/east positive.

use crate::Zone;

pub(crate) const ZONES: &[Zone] = &[
    Zone::new("Johor Bahru", "Johor", 1.4927, 103.7414),
    Zone::new("Muar", "Johor", 2.0442, 102.5689),
    Zone::new("Alor Setar", "Kedah", 6.1214, 100.3695),
    Zone::new("Kota Bharu", "Kelantan", 6.1254, 102.2381),
    Zone::new("Melaka", "Melaka", 2.1896, 102.2501),
    Zone::new("Seremban", "Negeri Sembilan", 2.7297, 101.9381),
    Zone::new("Kuantan", "Pahang", 3.8077, 103.3260),
    Zone::new("Ipoh", "Perak", 4.5975, 101.0901),
    Zone::new("Taiping", "Perak", 4.8500, 100.7333),
    Zone::new("Kangar", "Perlis", 6.4414, 100.1986),
    Zone::new("George Town", "Pulau Pinang", 5.4141, 100.3288),
    Zone::new("Kota Kinabalu", "Sabah", 5.9804, 116.0735),
    Zone::new("Sandakan", "Sabah", 5.8402, 118.1179),
    Zone::new("Tawau", "Sabah", 4.2448, 117.8911),
    Zone::new("Kuching", "Sarawak", 1.5533, 110.3592),
    Zone::new("Miri", "Sarawak", 4.3995, 113.9914),
    Zone::new("Sibu", "Sarawak", 2.2870, 111.8305),
    Zone::new("Klang", "Selangor", 3.0448, 101.4457),
    Zone::new("Shah Alam", "Selangor", 3.0733, 101.5185),
    Zone::new("Kuala Terengganu", "Terengganu", 5.3302, 103.1408),
    Zone::new("Kuala Lumpur", "WP Kuala Lumpur", 3.1390, 101.6869),
    Zone::new("Labuan", "WP Labuan", 5.2831, 115.2308),
    Zone::new("Putrajaya", "WP Putrajaya", 2.9264, 101.6964),
];
