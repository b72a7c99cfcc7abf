//! Synthetic corpus generator.
//!
//! Builds training corpora from the official VAK RB formatting patterns:
//! one generator per category over shared banks of surnames, publishers,
//! journals, and titles. Every generated example runs through the real
//! normalizer, so the corpus is canonical by construction.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use vakfmt_core::{Category, Corpus, CorpusRecord};
use vakfmt_processor::Normalizer;

// ---------------------------------------------------------------------------
// Data banks
// ---------------------------------------------------------------------------

const SURNAMES_RU: &[&str] = &[
    "Иванов", "Петров", "Сидоров", "Козлов", "Новиков", "Федоров", "Смирнов",
    "Волков", "Кузнецов", "Соколов", "Попов", "Лебедев", "Морозов", "Павлов",
    "Семенов", "Виноградов", "Богданов", "Михайлов", "Егоров", "Никитин",
    "Захаров", "Борисов", "Орлов", "Киселев", "Андреев", "Макаров",
];

const SURNAMES_BY: &[&str] = &[
    "Іваноў", "Казлоў", "Новік", "Кавалёў", "Васілеўскі", "Жылінскі",
    "Краўчанка", "Лукашэвіч", "Багдановіч", "Быкаў", "Караткевіч", "Адамовіч",
    "Барадулін", "Аляхновіч", "Бараноўскі",
];

const INITIALS: &[&str] = &[
    "А. В.", "И. П.", "С. Н.", "О. А.", "Н. М.", "В. И.", "Е. П.", "М. А.",
    "Д. В.", "К. С.", "Т. А.", "Ю. С.", "Г. И.", "В. В.", "А. А.", "Н. Н.",
];

const CITIES_BELARUS: &[&str] = &[
    "Минск", "Мінск", "Гомель", "Брест", "Гродно", "Могилёв", "Витебск", "Горки",
];

const PUBLISHERS_BELARUS: &[&str] = &[
    "Беларуская навука", "Вышэйшая школа", "БДУ", "БГУ", "БНТУ", "Амалфея",
    "Аверсэв", "Народная асвета", "Право и экономика", "БГУИР", "ГрГМУ",
    "Колорград", "Ковчег",
];

const JOURNALS: &[&str] = &[
    "Весці НАН Беларусі", "Вестник БГУ", "Вопросы экономики", "Нар. асвета",
    "Беларуская думка", "Доклады НАН Беларуси", "Вестник БНТУ", "Труды БГТУ",
    "Проблемы управления", "Информатика",
];

const NEWSPAPERS: &[&str] = &[
    "Сельская газета", "Рэспубліка", "Звязда", "Народная газета",
    "SB.BY. Беларусь сегодня", "Белорусская нива",
];

const ORGANIZATIONS: &[&str] = &[
    "НАН Беларуси", "Белорус. гос. ун-т", "БГУИР", "Бел. нац. техн. ун-т",
    "Гомел. гос. ун-т", "Гродн. гос. мед. ун-т", "Брест. гос. ун-т",
    "Нац. центр правовой информ. Респ. Беларусь",
];

const BOOK_TITLES: &[&str] = &[
    "Основы экономики", "Экономическая теория", "Финансовый менеджмент",
    "Бухгалтерский учет", "Ревизия и аудит", "Экономика предприятия",
    "Теория государства и права", "Гражданское право", "Трудовое право",
    "Информационные технологии", "Базы данных", "Компьютерные сети",
    "Системный анализ", "Методы исследования", "Математический анализ",
    "Органическая химия", "История Беларуси", "Философия", "Педагогика",
    "Анатомия человека", "Физиология", "Фармакология",
];

const ARTICLE_TITLES: &[&str] = &[
    "Анализ данных в современных условиях",
    "Проблемы развития и перспективы",
    "Методологические подходы к исследованию",
    "Современные тенденции развития",
    "Актуальные вопросы и пути решения",
    "Инновационные методы в практике",
    "Сравнительный анализ подходов",
    "Особенности функционирования системы",
    "Оптимизация процессов управления",
    "Эффективность применения методов",
];

const LAW_TITLES: &[&str] = &[
    "О государственном регулировании", "Об охране окружающей среды",
    "О защите прав потребителей", "Об образовании", "О здравоохранении",
    "О социальной защите", "О налогообложении", "О ценных бумагах",
    "О местном управлении", "О безопасности",
];

const PATENT_TITLES: &[&str] = &[
    "Способ обработки материалов", "Устройство для измерения",
    "Метод определения содержания", "Способ очистки воды",
    "Устройство контроля параметров", "Способ защиты информации",
];

const DISSERTATION_TOPICS: &[&str] = &[
    "Развитие системы управления",
    "Совершенствование методов анализа",
    "Повышение эффективности процессов",
    "Формирование механизма регулирования",
    "Моделирование социально-экономических систем",
    "Исследование закономерностей развития",
];

const CONFERENCE_TITLES: &[&str] = &[
    "Актуальные проблемы науки и образования",
    "Инновационные технологии в производстве",
    "Современные методы исследования",
    "Перспективы развития отрасли",
    "Научные достижения молодых ученых",
];

const SPECIALTY_CODES: &[&str] = &[
    "08.00.05", "08.00.01", "12.00.01", "05.13.01", "07.00.02", "07.00.09",
    "10.01.01", "13.00.01",
];

const STANDARD_PREFIXES: &[&str] = &["ГОСТ", "СТБ", "ТКП", "СТБ ISO", "ТР ТС"];

const MONTHS: &[&str] = &[
    "янв.", "февр.", "марта", "апр.", "мая", "июня", "июля", "авг.", "сент.",
    "окт.", "нояб.", "дек.",
];

/// Per-category weights of the reference distribution (sums to 1100).
const DISTRIBUTION: &[(Category, usize)] = &[
    (Category::Law, 180),
    (Category::BookFewAuthors, 160),
    (Category::JournalArticle, 120),
    (Category::CollectionArticle, 80),
    (Category::BookManyAuthors, 70),
    (Category::Standard, 60),
    (Category::Conference, 50),
    (Category::Multimedia, 50),
    (Category::Patent, 40),
    (Category::Dissertation, 30),
    (Category::ElectronicResource, 30),
    (Category::NewspaperArticle, 30),
    (Category::Preprint, 20),
    (Category::Map, 20),
    (Category::MusicScore, 20),
    (Category::VisualMaterial, 20),
    (Category::Archive, 20),
    (Category::ResearchReport, 15),
    (Category::Deposited, 15),
    (Category::Multivolume, 15),
    (Category::Abstract, 15),
    (Category::Review, 15),
    (Category::Catalog, 10),
    (Category::MethodicalGuide, 15),
];

const BASE_TOTAL: usize = 1100;

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

pub struct Generator {
    rng: StdRng,
    normalizer: Normalizer,
}

impl Generator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Generator { rng, normalizer: Normalizer::new() }
    }

    /// Generate a corpus of roughly `total` examples, scaled to the
    /// reference per-type distribution, shuffled.
    pub fn corpus(&mut self, total: usize) -> Corpus {
        let mut corpus =
            Corpus::new("Датасет для обучения форматированию библиографии ВАК РБ");
        corpus.source = Some("Generated from vak.gov.by patterns".to_string());

        for &(category, weight) in DISTRIBUTION {
            let count = (weight * total / BASE_TOTAL).max(1);
            for _ in 0..count {
                let text = self.example(category);
                corpus.examples.push(CorpusRecord {
                    category,
                    example: self.normalizer.normalize(&text),
                });
            }
        }

        corpus.examples.shuffle(&mut self.rng);
        corpus.tally();
        corpus
    }

    /// One raw (pre-normalization) example of the given category.
    pub fn example(&mut self, category: Category) -> String {
        match category {
            Category::BookFewAuthors => self.book_few_authors(),
            Category::BookManyAuthors => self.book_many_authors(),
            Category::JournalArticle => self.journal_article(),
            Category::CollectionArticle => self.collection_article(),
            Category::NewspaperArticle => self.newspaper_article(),
            Category::Dissertation => self.dissertation(),
            Category::Abstract => self.abstract_(),
            Category::Law => self.law(),
            Category::Standard => self.standard(),
            Category::Patent => self.patent(),
            Category::Conference => self.conference(),
            Category::ElectronicResource => self.electronic_resource(),
            Category::Preprint => self.preprint(),
            Category::Multimedia => self.multimedia(),
            Category::Map => self.map(),
            Category::MusicScore => self.music_score(),
            Category::VisualMaterial => self.visual_material(),
            Category::Archive => self.archive(),
            Category::ResearchReport => self.research_report(),
            Category::Deposited => self.deposited(),
            Category::Multivolume => self.multivolume(),
            Category::Review => self.review(),
            Category::Catalog => self.catalog(),
            Category::MethodicalGuide => self.methodical_guide(),
            Category::Unknown => String::new(),
        }
    }

    fn pick(&mut self, items: &[&'static str]) -> &'static str {
        items.choose(&mut self.rng).copied().unwrap_or_default()
    }

    /// (surname, initials); Russian names dominate 70/30 as in the source
    /// tables.
    fn author(&mut self) -> (&'static str, &'static str) {
        let surname = if self.rng.gen_bool(0.7) {
            self.pick(SURNAMES_RU)
        } else {
            self.pick(SURNAMES_BY)
        };
        (surname, self.pick(INITIALS))
    }

    fn inverted(author: (&str, &str)) -> String {
        format!("{}, {}", author.0, author.1)
    }

    fn direct(author: (&str, &str)) -> String {
        format!("{} {}", author.1, author.0)
    }

    fn year(&mut self) -> i32 {
        self.rng.gen_range(2015..=2025)
    }

    fn year_in(&mut self, lo: i32, hi: i32) -> i32 {
        self.rng.gen_range(lo..=hi)
    }

    fn pages(&mut self, lo: u32, hi: u32) -> u32 {
        self.rng.gen_range(lo..=hi)
    }

    fn page_range(&mut self, max: u32) -> (u32, u32) {
        let start = self.rng.gen_range(5..=max);
        (start, start + self.rng.gen_range(3..=50))
    }

    fn date_short(&mut self) -> String {
        format!(
            "{:02}.{:02}.{}",
            self.rng.gen_range(1..=28u32),
            self.rng.gen_range(1..=12u32),
            self.year()
        )
    }

    fn date_long(&mut self) -> String {
        format!("{} {} {} г.", self.rng.gen_range(1..=28u32), self.pick(MONTHS), self.year())
    }

    fn book_few_authors(&mut self) -> String {
        let count = self.rng.gen_range(1..=3usize);
        let authors: Vec<_> = (0..count).map(|_| self.author()).collect();
        let title = self.pick(BOOK_TITLES);
        let subtitle =
            self.pick(&["учеб. пособие", "учеб.-метод. пособие", "монография", "практикум", ""]);
        let direct: Vec<String> = authors.iter().map(|a| Self::direct(*a)).collect();
        let (city, publisher, year, pages) =
            (self.pick(CITIES_BELARUS), self.pick(PUBLISHERS_BELARUS), self.year(), self.pages(50, 600));

        let head = Self::inverted(authors[0]);
        let mut result = if subtitle.is_empty() {
            format!(
                "{head} {title} / {}. – {city} : {publisher}, {year}. – {pages} с.",
                direct.join(", ")
            )
        } else {
            format!(
                "{head} {title} : {subtitle} / {}. – {city} : {publisher}, {year}. – {pages} с.",
                direct.join(", ")
            )
        };
        if self.rng.gen_bool(0.2) {
            let edition = self.pick(&["2-е изд.", "3-е изд.", "2-е изд., перераб."]);
            result = result.replace(
                &format!(". – {city}"),
                &format!(". – {edition}. – {city}"),
            );
        }
        result
    }

    fn book_many_authors(&mut self) -> String {
        let title = self.pick(BOOK_TITLES);
        let first = self.author();
        format!(
            "{title} / {} [и др.]. – {} : {}, {}. – {} с.",
            Self::direct(first),
            self.pick(CITIES_BELARUS),
            self.pick(PUBLISHERS_BELARUS),
            self.year(),
            self.pages(50, 600)
        )
    }

    fn journal_article(&mut self) -> String {
        let author = self.author();
        let title = self.pick(ARTICLE_TITLES);
        let journal = self.pick(JOURNALS);
        let year = self.year();
        let issue = self.rng.gen_range(1..=12u32);
        let (start, end) = self.page_range(200);
        if self.rng.gen_bool(0.5) {
            let volume = self.rng.gen_range(1..=30u32);
            format!(
                "{} {title} / {} // {journal}. – {year}. – Т. {volume}, № {issue}. – С. {start}–{end}.",
                Self::inverted(author),
                Self::direct(author)
            )
        } else {
            format!(
                "{} {title} / {} // {journal}. – {year}. – № {issue}. – С. {start}–{end}.",
                Self::inverted(author),
                Self::direct(author)
            )
        }
    }

    fn collection_article(&mut self) -> String {
        let author = self.author();
        let title = self.pick(ARTICLE_TITLES);
        let collection = format!(
            "{} {}",
            self.pick(&["Актуальные проблемы", "Современные вопросы", "Научные труды"]),
            self.pick(&["науки", "экономики", "права", "образования"])
        );
        let (start, end) = self.page_range(300);
        format!(
            "{} {title} / {} // {collection} : сб. науч. ст. / {}. – {}, {}. – С. {start}–{end}.",
            Self::inverted(author),
            Self::direct(author),
            self.pick(ORGANIZATIONS),
            self.pick(CITIES_BELARUS),
            self.year()
        )
    }

    fn newspaper_article(&mut self) -> String {
        let author = self.author();
        let start = self.rng.gen_range(1..=15u32);
        let end = start + self.rng.gen_range(1..=5u32);
        format!(
            "{} {} / {} // {}. – {}. – {} {} – С. {start}–{end}.",
            Self::inverted(author),
            self.pick(ARTICLE_TITLES),
            Self::direct(author),
            self.pick(NEWSPAPERS),
            self.year(),
            self.rng.gen_range(1..=28u32),
            self.pick(MONTHS)
        )
    }

    fn dissertation(&mut self) -> String {
        let author = self.author();
        let degree = self.pick(&["дис. ... канд.", "дис. ... д-ра", "дыс. ... канд."]);
        let science = self.pick(&[
            "экон. наук", "юрид. наук", "техн. наук", "філол. навук", "гіст. навук",
            "пед. наук",
        ]);
        format!(
            "{} {} : {degree} {science} : {} / {}. – {}, {}. – {} л.",
            Self::inverted(author),
            self.pick(DISSERTATION_TOPICS),
            self.pick(SPECIALTY_CODES),
            Self::direct(author),
            self.pick(CITIES_BELARUS),
            self.year(),
            self.rng.gen_range(120..=300u32)
        )
    }

    fn abstract_(&mut self) -> String {
        let author = self.author();
        let degree = self.pick(&["автореф. дис. ... канд.", "автореф. дис. ... д-ра"]);
        let science = self.pick(&["экон. наук", "юрид. наук", "техн. наук", "пед. наук"]);
        let full_name = format!(
            "{} {} {}",
            author.0,
            self.pick(&["Александр", "Елена", "Сергей", "Наталья", "Ольга"]),
            self.pick(&["Викторович", "Александровна", "Николаевич", "Петрович", "Сергеевна"])
        );
        format!(
            "{} {} : {degree} {science} : {} / {full_name} ; {}. – {}, {}. – {} с.",
            Self::inverted(author),
            self.pick(DISSERTATION_TOPICS),
            self.pick(SPECIALTY_CODES),
            self.pick(ORGANIZATIONS),
            self.pick(CITIES_BELARUS),
            self.year(),
            self.rng.gen_range(20..=50u32)
        )
    }

    fn law(&mut self) -> String {
        let act = self.pick(&[
            "Закон Респ. Беларусь",
            "Декрет Президента Респ. Беларусь",
            "Указ Президента Респ. Беларусь",
            "постановление Совета Министров Респ. Беларусь",
            "приказ М-ва юстиции Респ. Беларусь",
        ]);
        let title = self.pick(LAW_TITLES);
        let date = self.date_long();
        let number = self.rng.gen_range(1..=500u32);
        match self.rng.gen_range(0..3u32) {
            0 => format!(
                "{title} : {act}, {date}, № {number} // Нац. реестр правовых актов Респ. \
                 Беларусь. – {}. – № {}. – Ст. {}.",
                self.year(),
                self.rng.gen_range(1..=12u32),
                self.rng.gen_range(1..=500u32)
            ),
            1 => format!(
                "{title} : {act}, {date}, № {number}-З // Ведамасцi Нац. сходу Рэсп. \
                 Беларусь. – {}. – № {}. – Арт. {}.",
                self.year(),
                self.rng.gen_range(1..=12u32),
                self.rng.gen_range(100..=500u32)
            ),
            _ => format!(
                "{title} : утв. постановлением М-ва юстиции Респ. Беларусь {}, № {number}. – \
                 Минск : Нац. центр правовой информ. Респ. Беларусь, {}. – {} с.",
                self.date_short(),
                self.year(),
                self.pages(50, 200)
            ),
        }
    }

    fn standard(&mut self) -> String {
        let title = self.pick(&[
            "Система стандартов по информации",
            "Общие технические требования",
            "Методы испытаний",
            "Правила приемки",
            "Технические условия",
        ]);
        // Designation number below 1990 so the hyphen pair never reads as
        // a year range.
        let designation = format!("{}-{}", self.rng.gen_range(1..=1800u32), self.year());
        format!(
            "{title} : {} {designation}. – Введ. {}. – {} : Госстандарт, {}. – {} с.",
            self.pick(STANDARD_PREFIXES),
            self.date_short(),
            self.pick(CITIES_BELARUS),
            self.year(),
            self.rng.gen_range(3..=50u32)
        )
    }

    fn patent(&mut self) -> String {
        let (kind, number) = match self.rng.gen_range(0..3u32) {
            0 => ("пат. BY", self.rng.gen_range(10_000..=99_999u32)),
            1 => ("а. с. SU", self.rng.gen_range(100_000..=999_999u32)),
            _ => ("полез. модель RU", self.rng.gen_range(10_000..=99_999u32)),
        };
        let count = self.rng.gen_range(1..=4usize);
        let inventors: Vec<String> =
            (0..count).map(|_| Self::direct(self.author())).collect();
        format!(
            "{} : {kind} {number} / {}. – Опубл. {}.",
            self.pick(PATENT_TITLES),
            inventors.join(", "),
            self.date_short()
        )
    }

    fn conference(&mut self) -> String {
        let day1 = self.rng.gen_range(1..=20u32);
        let day2 = day1 + self.rng.gen_range(1..=5u32);
        let city = self.pick(CITIES_BELARUS);
        format!(
            "{} : {} {} {}, {city}, {day1}–{day2} {} {} г. / {}. – {city} : {}, {}. – {} с.",
            self.pick(CONFERENCE_TITLES),
            self.pick(&["материалы", "сб. ст.", "тезисы докл."]),
            self.pick(&["Междунар.", "Респ.", "регион."]),
            self.pick(&["науч. конф.", "науч.-практ. конф."]),
            self.pick(MONTHS),
            self.year(),
            self.pick(ORGANIZATIONS),
            self.pick(PUBLISHERS_BELARUS),
            self.year(),
            self.pages(50, 500)
        )
    }

    fn electronic_resource(&mut self) -> String {
        let sites = [
            ("Национальный правовой Интернет-портал Республики Беларусь", "http://www.pravo.by"),
            ("Официальный сайт Президента Республики Беларусь", "http://www.president.gov.by"),
            ("Национальный статистический комитет Республики Беларусь", "http://www.belstat.gov.by"),
            ("Научная электронная библиотека", "http://www.elibrary.ru"),
        ];
        let (title, url) = sites[self.rng.gen_range(0..sites.len())];
        let date = self.date_short();
        if self.rng.gen_bool(0.5) {
            format!(
                "{title} [Электронный ресурс]. – Режим доступа: {url}. – Дата доступа: {date}."
            )
        } else {
            format!(
                "{title} : [сайт]. – Минск, 2003–{}. – URL: {url} (дата обращения: {date}).",
                self.year()
            )
        }
    }

    fn preprint(&mut self) -> String {
        let author = self.author();
        let org = self.pick(ORGANIZATIONS);
        format!(
            "{} {} / {}. – {} : {org}, {}. – {} с. – (Препринт / {org} ; № {}).",
            Self::inverted(author),
            self.pick(ARTICLE_TITLES),
            Self::direct(author),
            self.pick(CITIES_BELARUS),
            self.year(),
            self.rng.gen_range(10..=30u32),
            self.rng.gen_range(1..=50u32)
        )
    }

    fn multimedia(&mut self) -> String {
        let author = self.author();
        format!(
            "{} {} {} / {}. – {} : {}, {}. – {}.",
            Self::inverted(author),
            self.pick(&["Симфония", "Концерт", "Народные песни", "Классическая музыка"]),
            self.pick(&["[Звукозапись]", "[Видеозапись]"]),
            Self::direct(author),
            self.pick(CITIES_BELARUS),
            self.pick(PUBLISHERS_BELARUS),
            self.year(),
            self.pick(&["1 зв. диск", "1 CD-ROM", "1 DVD video"])
        )
    }

    fn map(&mut self) -> String {
        format!(
            "{} [Карты] : [{}]. – {}. – {} : Белкартография, {}. – 1 к.",
            self.pick(&["Беларусь", "Минская область", "Гомельская область", "Европа"]),
            self.pick(&["полит.-адм. карта", "физ. карта", "турист. карта"]),
            self.pick(&["1 : 500 000", "1 : 1 000 000", "1 : 2 500 000"]),
            self.pick(CITIES_BELARUS),
            self.year()
        )
    }

    fn music_score(&mut self) -> String {
        let author = self.author();
        format!(
            "{} {} [Ноты] : {} / {}. – {} : {}, {}. – {} с.",
            Self::inverted(author),
            self.pick(&["Романсы", "Сонаты", "Прелюдии", "Этюды", "Вальсы"]),
            self.pick(&["для фортепиано", "для скрипки с фортепиано", "для хора"]),
            Self::direct(author),
            self.pick(CITIES_BELARUS),
            self.pick(PUBLISHERS_BELARUS),
            self.year(),
            self.rng.gen_range(20..=100u32)
        )
    }

    fn visual_material(&mut self) -> String {
        format!(
            "{} : [{}]. – {} : {}, {}. – 1 л.",
            self.pick(&["С праздником!", "Поздравляем!", "Белорусские пейзажи"]),
            self.pick(&["плакат", "открытка", "репродукция"]),
            self.pick(CITIES_BELARUS),
            self.pick(&["Полиграфкомбинат им. Я. Коласа", "Нац. б-ка Беларуси"]),
            self.year()
        )
    }

    fn archive(&mut self) -> String {
        let archive = self.pick(&[
            "Национальный архив Республики Беларусь",
            "Государственный архив Минской области",
            "Архив суда Ленинского района г. Минска",
        ]);
        if self.rng.gen_bool(0.5) {
            let year = self.year_in(2000, 2020);
            format!(
                "{archive} за {year} г. – Уголовное дело № {}/{:02} ({}).",
                self.rng.gen_range(1..=999u32),
                year % 100,
                self.rng.gen_range(1..=20u32)
            )
        } else {
            format!(
                "{archive}. – Ф. {}. Оп. {}. Д. {}. Л. {}.",
                self.rng.gen_range(1..=100u32),
                self.rng.gen_range(1..=10u32),
                self.rng.gen_range(1..=100u32),
                self.rng.gen_range(1..=300u32)
            )
        }
    }

    fn research_report(&mut self) -> String {
        let leader = self.author();
        let count = self.rng.gen_range(2..=4usize);
        let executors: Vec<String> =
            (0..count).map(|_| Self::direct(self.author())).collect();
        format!(
            "{} : отчет о НИР (заключ.) / {} ; рук. {} ; исполн.: {}. – {}, {}. – {} с. – \
             № ГР {}{}.",
            self.pick(ARTICLE_TITLES),
            self.pick(ORGANIZATIONS),
            Self::direct(leader),
            executors.join(", "),
            self.pick(CITIES_BELARUS),
            self.year(),
            self.pages(50, 300),
            self.year_in(2015, 2020),
            self.rng.gen_range(1000..=9999u32)
        )
    }

    fn deposited(&mut self) -> String {
        let author = self.author();
        format!(
            "{} {} / {} ; {}. – {}, {}. – {} с. – Деп. в {} {}, № {}.",
            Self::inverted(author),
            self.pick(ARTICLE_TITLES),
            Self::direct(author),
            self.pick(ORGANIZATIONS),
            self.pick(CITIES_BELARUS),
            self.year_in(2010, 2020),
            self.rng.gen_range(10..=50u32),
            self.pick(&["ИНИОН РАН", "ВИНИТИ", "БелИСА"]),
            self.date_short(),
            self.rng.gen_range(50_000..=70_000u32)
        )
    }

    fn multivolume(&mut self) -> String {
        let author = self.author();
        let volumes = self.rng.gen_range(2..=10u32);
        let start = self.year_in(2010, 2020);
        format!(
            "{} {} : у {volumes} т. / {}. – {} : {}, {start}–{}. – {volumes} т.",
            Self::inverted(author),
            self.pick(&["Полное собрание сочинений", "Избранные труды", "Собрание сочинений"]),
            Self::direct(author),
            self.pick(CITIES_BELARUS),
            self.pick(PUBLISHERS_BELARUS),
            start + self.rng.gen_range(1..=5)
        )
    }

    fn review(&mut self) -> String {
        let reviewer = self.author();
        let reviewed = self.author();
        let year = self.year();
        let start = self.rng.gen_range(50..=150u32);
        format!(
            "{} [Рецензия] / {} // {}. – {year}. – № {}. – С. {start}–{}. – Рец. на кн.: {} / \
             {}. – {} : {}, {}. – {} с.",
            Self::inverted(reviewer),
            Self::direct(reviewer),
            self.pick(JOURNALS),
            self.rng.gen_range(1..=12u32),
            start + self.rng.gen_range(2..=5),
            self.pick(BOOK_TITLES),
            Self::direct(reviewed),
            self.pick(CITIES_BELARUS),
            self.pick(PUBLISHERS_BELARUS),
            year - self.rng.gen_range(0..=2),
            self.pages(50, 600)
        )
    }

    fn catalog(&mut self) -> String {
        let compiler = self.author();
        let editor = self.author();
        format!(
            "{} / {} ; сост.: {} ; отв. ред. {}. – {} : {}, {}. – {} с.",
            self.pick(&[
                "Каталог инновационных разработок",
                "Каталог древесных растений",
                "Каталог научных изданий",
            ]),
            self.pick(ORGANIZATIONS),
            Self::direct(compiler),
            Self::direct(editor),
            self.pick(CITIES_BELARUS),
            self.pick(PUBLISHERS_BELARUS),
            self.year(),
            self.pages(100, 500)
        )
    }

    fn methodical_guide(&mut self) -> String {
        let compiler = self.author();
        format!(
            "{} : {} {} / {} ; сост. {}. – {} : {}, {}. – {} с.",
            self.pick(&["Математика", "Физика", "Химия", "Программирование", "Экономика"]),
            self.pick(&["метод. указания", "метод. рекомендации", "метод. пособие"]),
            self.pick(&["к практ. занятиям", "к лаб. работам", "к курсовому проектированию"]),
            self.pick(ORGANIZATIONS),
            Self::direct(compiler),
            self.pick(CITIES_BELARUS),
            self.pick(PUBLISHERS_BELARUS),
            self.year(),
            self.rng.gen_range(20..=80u32)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vakfmt_processor::Normalizer;

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = Generator::new(Some(42)).corpus(100);
        let b = Generator::new(Some(42)).corpus(100);
        assert_eq!(a.total_examples, b.total_examples);
        let a_examples: Vec<_> = a.examples.iter().map(|r| &r.example).collect();
        let b_examples: Vec<_> = b.examples.iter().map(|r| &r.example).collect();
        assert_eq!(a_examples, b_examples);
    }

    #[test]
    fn test_every_category_represented() {
        let corpus = Generator::new(Some(7)).corpus(200);
        for &(category, _) in DISTRIBUTION {
            assert!(
                corpus.examples.iter().any(|r| r.category == category),
                "no examples of {category}"
            );
        }
        assert_eq!(corpus.total_examples, corpus.examples.len());
    }

    #[test]
    fn test_generated_examples_are_canonical() {
        let normalizer = Normalizer::new();
        let corpus = Generator::new(Some(11)).corpus(300);
        for record in &corpus.examples {
            assert_eq!(
                normalizer.normalize(&record.example),
                record.example,
                "not canonical: {:?}",
                record.example
            );
            assert!(normalizer.lint(&record.example).is_empty());
        }
    }

    #[test]
    fn test_distribution_tracks_weights() {
        let corpus = Generator::new(Some(3)).corpus(1100);
        let law = corpus.type_distribution.get("law").copied().unwrap_or(0);
        let catalog = corpus.type_distribution.get("catalog").copied().unwrap_or(0);
        assert!(law > catalog);
        assert_eq!(law, 180);
    }
}
