//! The compiled-in species catalog.

use super::{GeoPoint, MarkerIcon, Record};

struct Entry {
    title: &'static str,
    subtitle: &'static str,
    location: GeoPoint,
    zoom: u8,
    media: &'static str,
    icon: MarkerIcon,
    summary: &'static str,
    biography: &'static str,
    habitat: &'static str,
    population_trend: &'static str,
    threats: &'static str,
}

const ENTRIES: &[Entry] = &[
    Entry {
        title: "Exploring China's Endangered Wildlife",
        subtitle: "中国濒危动物",
        location: GeoPoint::new(35.8617, 104.1954),
        zoom: 4,
        media: "overview.jpg",
        icon: MarkerIcon::Home,
        summary: "China spans deserts, plateaus, river basins and temperate forest, \
                  and is home to many rare animals found nowhere else. Follow the \
                  map to visit their habitats.",
        biography: "Each stop on this map is a species listed as endangered or \
                    vulnerable, placed at the heart of its remaining range.",
        habitat: "From the Tibetan Plateau to the Amur forests of the northeast.",
        population_trend: "Mixed: some species are recovering under protection, \
                           others are still declining.",
        threats: "Habitat loss, fragmentation, poaching and river development.",
    },
    Entry {
        title: "Giant Panda",
        subtitle: "大熊猫 · Ailuropoda melanoleuca",
        location: GeoPoint::new(30.8, 103.0),
        zoom: 7,
        media: "giant-panda.jpg",
        icon: MarkerIcon::Paw,
        summary: "Found only in China, the giant panda lives almost entirely on bamboo.",
        biography: "A bear adapted to a bamboo diet, with an enlarged wrist bone \
                    acting as a 'pseudo-thumb' for gripping stems. Adults eat for \
                    up to fourteen hours a day.",
        habitat: "Mountain bamboo forests of Sichuan, Shaanxi and Gansu, \
                  between 1,200 and 3,400 m.",
        population_trend: "Increasing. Around 1,860 adults in the wild after \
                           decades of reserve expansion.",
        threats: "Forest fragmentation, periodic bamboo die-off, infrastructure \
                  cutting across corridors.",
    },
    Entry {
        title: "Golden Snub-nosed Monkey",
        subtitle: "金丝猴 · Rhinopithecus roxellana",
        location: GeoPoint::new(33.5, 108.0),
        zoom: 7,
        media: "golden-snub-nosed-monkey.jpg",
        icon: MarkerIcon::Tree,
        summary: "Known for its golden coat and striking blue face.",
        biography: "Lives in large multi-level societies of several hundred \
                    animals and survives winters below freezing on lichen and bark.",
        habitat: "High mountain forest of the Qinling range and Shennongjia.",
        population_trend: "Stable to slowly increasing within protected areas.",
        threats: "Logging, road building and disturbance from tourism.",
    },
    Entry {
        title: "Siberian Tiger",
        subtitle: "东北虎 · Panthera tigris altaica",
        location: GeoPoint::new(45.0, 130.0),
        zoom: 6,
        media: "siberian-tiger.jpg",
        icon: MarkerIcon::Star,
        summary: "One of the largest cats in the world, the king of the northern forest.",
        biography: "A solitary hunter that ranges over hundreds of square \
                    kilometres, preying on red deer and wild boar.",
        habitat: "Northeast China and the Russian Far East.",
        population_trend: "Slowly increasing. A few dozen individuals now \
                           cross into China from Russia.",
        threats: "Poaching, prey depletion and conflict with livestock.",
    },
    Entry {
        title: "Yangtze Finless Porpoise",
        subtitle: "长江江豚 · Neophocaena asiaeorientalis",
        location: GeoPoint::new(29.5, 116.0),
        zoom: 7,
        media: "yangtze-finless-porpoise.jpg",
        icon: MarkerIcon::Water,
        summary: "The only freshwater porpoise in the world, with a famously smiling face.",
        biography: "A small toothed whale without a dorsal fin, living in \
                    pairs or small groups and hunting fish by echolocation.",
        habitat: "The middle and lower Yangtze, Poyang Lake and Dongting Lake.",
        population_trend: "Recovering. About 1,250 counted in 2022 following \
                           the ten-year Yangtze fishing ban.",
        threats: "Boat traffic, sand dredging, pollution and entanglement.",
    },
    Entry {
        title: "Crested Ibis",
        subtitle: "朱鹮 · Nipponia nippon",
        location: GeoPoint::new(33.2, 107.5),
        zoom: 8,
        media: "crested-ibis.jpg",
        icon: MarkerIcon::Feather,
        summary: "Once thought extinct, the crested ibis returned from just seven birds.",
        biography: "A wading bird with pink-tinged plumage, rediscovered in \
                    1981 in Yang County, Shaanxi.",
        habitat: "Paddy fields, streams and riverside woodland in southern Shaanxi.",
        population_trend: "Increasing. Now several thousand birds, wild and captive.",
        threats: "Pesticide use, loss of wet rice paddies and nesting trees.",
    },
    Entry {
        title: "Snow Leopard",
        subtitle: "雪豹 · Panthera uncia",
        location: GeoPoint::new(34.5, 95.5),
        zoom: 6,
        media: "snow-leopard.jpg",
        icon: MarkerIcon::Mountain,
        summary: "The elusive 'ghost of the mountains' of the Tibetan Plateau.",
        biography: "A thick-furred cat with a tail nearly as long as its body, \
                    used for balance and warmth on steep rock.",
        habitat: "Alpine meadows and rocky slopes of Sanjiangyuan, Qinghai.",
        population_trend: "Unknown to decreasing across much of its range.",
        threats: "Retaliatory killing, prey loss and a warming climate.",
    },
    Entry {
        title: "Chinese Alligator",
        subtitle: "扬子鳄 · Alligator sinensis",
        location: GeoPoint::new(30.9, 118.7),
        zoom: 8,
        media: "chinese-alligator.jpg",
        icon: MarkerIcon::Water,
        summary: "One of the most endangered crocodilians, surviving in a few wetlands.",
        biography: "A small, armoured alligator that spends up to half the \
                    year hibernating in burrows.",
        habitat: "Ponds and wetlands of southern Anhui.",
        population_trend: "Wild population of a few hundred, supplemented by \
                           captive releases.",
        threats: "Conversion of wetlands to farmland and aquaculture.",
    },
];

pub(super) fn records() -> Vec<Record> {
    ENTRIES
        .iter()
        .enumerate()
        .map(|(id, e)| Record {
            id,
            title: e.title.to_string(),
            subtitle: e.subtitle.to_string(),
            location: e.location,
            zoom: e.zoom,
            media: e.media.to_string(),
            icon: e.icon,
            summary: e.summary.to_string(),
            biography: e.biography.to_string(),
            habitat: e.habitat.to_string(),
            population_trend: e.population_trend.to_string(),
            threats: e.threats.to_string(),
        })
        .collect()
}
