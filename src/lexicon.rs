//! The closed lexicon: word forms mapped to terminal categories.
//!
//! Lookups are set-valued. The reference word lists overlap in places
//! ("el" and "tu" are both determiner and pronoun), so a word may carry
//! more than one category; the grammar picks between them using the fixed
//! priority order in [`Category::PRIORITY`].

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

/// A terminal category of the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Det,
    Adj,
    N,
    V,
    Name,
    Pron,
    Conj,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Det,
        Category::Adj,
        Category::N,
        Category::V,
        Category::Name,
        Category::Pron,
        Category::Conj,
    ];

    /// Fixed disambiguation order for words with more than one category.
    pub const PRIORITY: [Category; 7] = [
        Category::Det,
        Category::Adj,
        Category::N,
        Category::Name,
        Category::Pron,
        Category::Conj,
        Category::V,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Det => "Det",
            Category::Adj => "Adj",
            Category::N => "N",
            Category::V => "V",
            Category::Name => "Name",
            Category::Pron => "Pron",
            Category::Conj => "Conj",
        }
    }

    /// Spanish display name, used by the tree and trace renderers.
    pub fn spanish_name(self) -> &'static str {
        match self {
            Category::Det => "Determinante",
            Category::Adj => "Adjetivo",
            Category::N => "Sustantivo",
            Category::V => "Verbo",
            Category::Name => "Nombre propio",
            Category::Pron => "Pronombre",
            Category::Conj => "Conjunción",
        }
    }

    fn bit(self) -> u8 {
        match self {
            Category::Det => 1 << 0,
            Category::Adj => 1 << 1,
            Category::N => 1 << 2,
            Category::V => 1 << 3,
            Category::Name => 1 << 4,
            Category::Pron => 1 << 5,
            Category::Conj => 1 << 6,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A small set of categories, the value type of lexicon lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategorySet(u8);

impl CategorySet {
    pub const EMPTY: CategorySet = CategorySet(0);

    /// Categories that can start a noun phrase, for the VP object lookahead.
    pub const NP_START: CategorySet = CategorySet(
        1 << 0 // Det
            | 1 << 1 // Adj
            | 1 << 2 // N
            | 1 << 4 // Name
            | 1 << 5, // Pron
    );

    pub fn insert(&mut self, category: Category) {
        self.0 |= category.bit();
    }

    pub fn contains(self, category: Category) -> bool {
        self.0 & category.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn intersects(self, other: CategorySet) -> bool {
        self.0 & other.0 != 0
    }

    /// Iterates the member categories in priority order.
    pub fn iter(self) -> impl Iterator<Item = Category> {
        Category::PRIORITY
            .into_iter()
            .filter(move |c| self.contains(*c))
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut set = CategorySet::EMPTY;
        for category in iter {
            set.insert(category);
        }
        set
    }
}

const DETS: &[&str] = &[
    "el", "la", "los", "las", "un", "una", "unos", "unas", "este", "esta", "estos", "estas",
    "ese", "esa", "esos", "esas", "aquel", "aquella", "aquellos", "aquellas", "mi", "mis", "tu",
    "tus", "su", "sus", "nuestro", "nuestra", "nuestros", "nuestras",
];

const ADJS: &[&str] = &[
    "grande", "roja", "rojo", "feliz", "pequena", "pequeno", "rapida", "rapido", "alta", "alto",
    "baja", "bajo", "lenta", "lento", "nueva", "nuevo", "vieja", "viejo", "triste", "contenta",
    "contento", "hermosa", "hermoso", "inteligente", "fuerte",
];

const NOUNS: &[&str] = &[
    "nina", "nino", "ninas", "ninos", "perro", "perros", "perra", "perras", "gata", "gato",
    "gatas", "gatos", "carne", "coche", "coches", "carro", "carros", "auto", "autos", "libro",
    "libros", "casa", "casas", "ciudad", "ciudades", "amigo", "amiga", "amigos", "amigas",
    "familia", "familias", "maestro", "maestra", "profesor", "profesora", "estudiante",
    "estudiantes", "padre", "madre", "hijo", "hija", "hermano", "hermana",
];

const VERBS: &[&str] = &[
    "come", "comen", "como", "comes", "comemos", "mira", "miran", "miro", "miras", "miramos",
    "ama", "aman", "amo", "amas", "amamos", "ve", "ven", "veo", "ves", "vemos", "corre",
    "corren", "corro", "corres", "corremos", "duerme", "duermen", "duermo", "duermes",
    "dormimos", "habla", "hablan", "hablo", "hablas", "hablamos", "escribe", "escriben",
    "escribo", "escribes", "escribimos", "tiene", "tienen", "tengo", "tienes", "tenemos",
    "camina", "caminan", "camino", "caminas", "caminamos", "salta", "saltan", "salto", "saltas",
    "saltamos", "juega", "juegan", "juego", "juegas", "jugamos",
];

const NAMES: &[&str] = &[
    "juan", "maria", "ana", "luis", "melvin", "henry", "mario", "fabio", "carlos", "rodolfo",
    "andrea", "sofia", "laura", "pedro", "jose", "carmen", "paula", "diego", "ricardo", "hugo",
];

const PRONS: &[&str] = &[
    "ella", "el", "ellos", "ellas", "yo", "tu", "usted", "ustedes", "nosotros", "nosotras",
];

const CONJS: &[&str] = &["y", "e", "ni", "o", "u"];

/// The static, read-only word table. Obtain it through [`Lexicon::global`].
#[derive(Debug)]
pub struct Lexicon {
    entries: HashMap<&'static str, CategorySet>,
}

static LEXICON: Lazy<Lexicon> = Lazy::new(Lexicon::build);

impl Lexicon {
    pub fn global() -> &'static Lexicon {
        &LEXICON
    }

    fn build() -> Lexicon {
        let mut entries: HashMap<&'static str, CategorySet> = HashMap::new();
        let groups: [(Category, &[&str]); 7] = [
            (Category::Det, DETS),
            (Category::Adj, ADJS),
            (Category::N, NOUNS),
            (Category::V, VERBS),
            (Category::Name, NAMES),
            (Category::Pron, PRONS),
            (Category::Conj, CONJS),
        ];
        for (category, words) in groups {
            for &word in words {
                entries.entry(word).or_default().insert(category);
            }
        }
        Lexicon { entries }
    }

    /// The categories a normalized word form is eligible for.
    /// An empty set means the word is unknown.
    pub fn lookup(&self, word: &str) -> CategorySet {
        self.entries.get(word).copied().unwrap_or(CategorySet::EMPTY)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
