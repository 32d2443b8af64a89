use encoding_rs::WINDOWS_1252;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len())]
    }
}

/// Taxon: class, order, suborder, family, genus, species.
const TAXA: &[(&str, &str, &str, &str, &str, &str)] = &[
    (
        "Mammalia",
        "Cetartiodactyla",
        "Odontoceti",
        "Pontoporiidae",
        "Pontoporia",
        "Pontoporia blainvillei",
    ),
    (
        "Mammalia",
        "Cetartiodactyla",
        "Odontoceti",
        "Delphinidae",
        "Sotalia",
        "Sotalia guianensis",
    ),
    (
        "Mammalia",
        "Cetartiodactyla",
        "Odontoceti",
        "Delphinidae",
        "Tursiops",
        "Tursiops truncatus",
    ),
    (
        "Mammalia",
        "Carnivora",
        "Caniformia",
        "Otariidae",
        "Arctocephalus",
        "Arctocephalus australis",
    ),
    (
        "Reptilia",
        "Testudines",
        "Cryptodira",
        "Cheloniidae",
        "Chelonia",
        "Chelonia mydas",
    ),
    (
        "Reptilia",
        "Testudines",
        "Cryptodira",
        "Cheloniidae",
        "Caretta",
        "Caretta caretta",
    ),
    (
        "Reptilia",
        "Testudines",
        "Cryptodira",
        "Dermochelyidae",
        "Dermochelys",
        "Dermochelys coriacea",
    ),
    (
        "Aves",
        "Suliformes",
        "",
        "Sulidae",
        "Sula",
        "Sula leucogaster",
    ),
    (
        "Aves",
        "Sphenisciformes",
        "",
        "Spheniscidae",
        "Spheniscus",
        "Spheniscus magellanicus",
    ),
    (
        "Aves",
        "Procellariiformes",
        "",
        "Procellariidae",
        "Puffinus",
        "Puffinus puffinus",
    ),
];

/// Stranding site: state, county, beach, approximate latitude/longitude.
const SITES: &[(&str, &str, &str, f64, f64)] = &[
    ("PR", "Guaratuba", "Praia de Brejatuba", -25.905, -48.565),
    ("PR", "Matinhos", "Praia de Caiobá", -25.853, -48.532),
    ("PR", "Pontal do Paraná", "Praia de Leste", -25.680, -48.450),
    ("PR", "Paranaguá", "Ilha do Mel - Praia Grande", -25.565, -48.305),
    ("SC", "Itapoá", "Barra do Saí", -26.020, -48.602),
    ("SC", "São Francisco do Sul", "Praia Grande", -26.290, -48.520),
    ("SC", "Barra Velha", "Praia do Tabuleiro", -26.655, -48.678),
    ("SC", "Balneário Camboriú", "Praia Central", -26.995, -48.632),
    ("SC", "Florianópolis", "Praia da Armação", -27.750, -48.508),
    ("SC", "Florianópolis", "Praia do Moçambique", -27.480, -48.385),
    ("SC", "Garopaba", "Praia do Silveira", -28.040, -48.605),
    ("SC", "Laguna", "Praia do Mar Grosso", -28.490, -48.762),
];

const CONDITIONS: &[&str] = &[
    "Vivo",
    "Morto - código 2",
    "Morto - código 3",
    "Morto - código 4",
    "Morto - código 5",
];

const STAGES: &[&str] = &["Adulto", "Juvenil", "Filhote", "Indeterminado"];

const DAYS_PER_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Comma-decimal rendering used by the source table.
fn comma_decimal(value: f64) -> String {
    format!("{value:.4}").replace('.', ",")
}

fn main() {
    let mut rng = SimpleRng::new(42);
    let n_records = 400;

    let mut out = String::new();
    out.push_str(
        "Individual Identifier;Occurrence Identifier;\
Date/time (ISO 8601 / Local time);Animal condition;Developmental stage;\
Latitude;Longitude;State;County;Beach;Class;Order;Suborder;Family;Genus;Species\n",
    );

    for i in 0..n_records {
        let taxon = rng.pick(TAXA);
        let site = rng.pick(SITES);

        // August 2018 through August 2023, plus a few strays outside it.
        let year = match rng.below(20) {
            0 => 2017,
            1 => 2024,
            _ => 2018 + rng.below(6) as i32,
        };
        let month = 1 + rng.below(12) as u32;
        let day = 1 + rng.below(DAYS_PER_MONTH[(month - 1) as usize] as usize) as u32;
        let hour = 6 + rng.below(12);
        let minute = rng.below(60);

        // Occasional data-quality attrition, as in the field records.
        let timestamp = if rng.below(50) == 0 {
            "s/d".to_string()
        } else {
            format!("{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:00")
        };
        let latitude = comma_decimal(site.3 + (rng.next_f64() - 0.5) * 0.05);
        let longitude = if rng.below(40) == 0 {
            String::new()
        } else {
            comma_decimal(site.4 + (rng.next_f64() - 0.5) * 0.05)
        };
        let stage = if rng.below(10) == 0 {
            ""
        } else {
            *rng.pick(STAGES)
        };

        out.push_str(&format!(
            "PMP-{:05};OC-{:05};{};{};{};{};{};{};{};{};{};{};{};{};{};{}\n",
            i + 1,
            i + 1,
            timestamp,
            rng.pick(CONDITIONS),
            stage,
            latitude,
            longitude,
            site.0,
            site.1,
            site.2,
            taxon.0,
            taxon.1,
            taxon.2,
            taxon.3,
            taxon.4,
            taxon.5,
        ));
    }

    // The source table ships in a legacy single-byte encoding; write the same
    // bytes the loader expects to decode.
    let (bytes, _, _) = WINDOWS_1252.encode(&out);

    let output_path = "assets/encalhes.csv";
    std::fs::write(output_path, &bytes).expect("Failed to write dataset");

    println!("Wrote {n_records} stranding records to {output_path}");
}
