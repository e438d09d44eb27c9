//! Landing page content.
//!
//! Products, FAQ entries and the rest of the page copy are fixed for the
//! landing page. They live in one [`Catalog`] value held by the application
//! state and handed to the templates.

use lego_store_core::{Price, ProductId};

/// A set shown in the product grid.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub name: &'static str,
    pub price: Price,
    /// Recommended minimum age.
    pub age: u8,
    pub pieces: u32,
    pub rating: f32,
    pub badge: Option<&'static str>,
    pub image: &'static str,
}

impl Product {
    /// Rating with one decimal, as shown next to the star (`5.0`, `4.9`).
    #[must_use]
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }
}

#[derive(Debug, Clone)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// A highlight card under the hero.
#[derive(Debug, Clone)]
pub struct Feature {
    /// Icon name, resolved at render time.
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Accent color name used for the card's CSS modifier (`accent-blue`).
    pub accent: &'static str,
}

/// A header link that jumps to a section of the page.
#[derive(Debug, Clone)]
pub struct NavLink {
    pub label: &'static str,
    /// Id of the target section, without the `#`.
    pub anchor: &'static str,
}

#[derive(Debug, Clone)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [&'static str],
}

/// Section ids rendered by the landing page.
pub mod sections {
    pub const HERO: &str = "hero";
    pub const FEATURES: &str = "features";
    pub const PRODUCTS: &str = "products";
    pub const PROMO: &str = "promo";
    pub const FAQ: &str = "faq";
}

/// All landing page content.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub faqs: Vec<FaqEntry>,
    pub features: Vec<Feature>,
    pub nav_links: Vec<NavLink>,
    pub footer_columns: Vec<FooterColumn>,
    /// Icon names of the social profiles in the footer.
    pub socials: Vec<&'static str>,
}

const IMAGE_DEATH_STAR: &str =
    "https://images.unsplash.com/photo-1585366119957-e9730b6d0f60?w=600&q=80";
const IMAGE_SUPERCAR: &str =
    "https://images.unsplash.com/photo-1590227763209-821c686b0986?w=600&q=80";
const IMAGE_LANDMARK: &str =
    "https://images.unsplash.com/photo-1560969184-10fe8719e047?w=600&q=80";

/// Large hero image.
pub const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1585366119957-e9730b6d0f60?w=800&q=80";

impl Catalog {
    /// The LEGO Store landing page content.
    #[must_use]
    pub fn lego_store() -> Self {
        Self {
            products: products(),
            faqs: faqs(),
            features: vec![
                Feature {
                    icon: "truck",
                    title: "Быстрая доставка",
                    description: "1-2 дня по Москве и СПб",
                    accent: "blue",
                },
                Feature {
                    icon: "shield-check",
                    title: "Оригинал 100%",
                    description: "Официальная гарантия LEGO",
                    accent: "green",
                },
                Feature {
                    icon: "refresh-cw",
                    title: "Легкий возврат",
                    description: "14 дней на возврат",
                    accent: "red",
                },
            ],
            nav_links: vec![
                NavLink {
                    label: "Каталог",
                    anchor: sections::PRODUCTS,
                },
                NavLink {
                    label: "Новинки",
                    anchor: sections::HERO,
                },
                NavLink {
                    label: "Акции",
                    anchor: sections::PROMO,
                },
                NavLink {
                    label: "FAQ",
                    anchor: sections::FAQ,
                },
            ],
            footer_columns: vec![
                FooterColumn {
                    heading: "Каталог",
                    links: &[
                        "Star Wars",
                        "Technic",
                        "Creator",
                        "Marvel",
                        "Harry Potter",
                        "Architecture",
                    ],
                },
                FooterColumn {
                    heading: "Помощь",
                    links: &[
                        "Доставка",
                        "Оплата",
                        "Возврат",
                        "Гарантия",
                        "Контакты",
                        "Отзывы",
                    ],
                },
            ],
            socials: vec!["facebook", "instagram", "youtube", "twitter"],
        }
    }
}

fn products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            name: "LEGO Star Wars Звезда Смерти",
            price: Price::rubles(8499),
            age: 14,
            pieces: 2345,
            rating: 4.9,
            badge: Some("Хит"),
            image: IMAGE_DEATH_STAR,
        },
        Product {
            id: ProductId::new(2),
            name: "LEGO Technic Lamborghini",
            price: Price::rubles(12999),
            age: 18,
            pieces: 3869,
            rating: 5.0,
            badge: Some("Новинка"),
            image: IMAGE_SUPERCAR,
        },
        Product {
            id: ProductId::new(3),
            name: "LEGO Creator Замок Нойшванштайн",
            price: Price::rubles(5499),
            age: 16,
            pieces: 1560,
            rating: 4.8,
            badge: None,
            image: IMAGE_DEATH_STAR,
        },
        Product {
            id: ProductId::new(4),
            name: "LEGO Marvel Колизей",
            price: Price::rubles(15999),
            age: 18,
            pieces: 9036,
            rating: 4.9,
            badge: Some("Эксклюзив"),
            image: IMAGE_LANDMARK,
        },
        Product {
            id: ProductId::new(5),
            name: "LEGO Harry Potter Хогвартс",
            price: Price::rubles(9999),
            age: 16,
            pieces: 6020,
            rating: 4.9,
            badge: None,
            image: IMAGE_DEATH_STAR,
        },
        Product {
            id: ProductId::new(6),
            name: "LEGO Architecture Тадж-Махал",
            price: Price::rubles(7499),
            age: 16,
            pieces: 5923,
            rating: 4.7,
            badge: Some("Скидка"),
            image: IMAGE_LANDMARK,
        },
    ]
}

fn faqs() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "Какая гарантия на конструкторы LEGO?",
            answer: "Все конструкторы имеют официальную гарантию LEGO на 2 года. Если вы обнаружили брак или недостающие детали, мы бесплатно заменим их. Также действует расширенная гарантия магазина на 30 дней с момента покупки.",
        },
        FaqEntry {
            question: "Сколько времени занимает доставка?",
            answer: "Доставка по Москве и Санкт-Петербургу занимает 1-2 дня. В другие регионы России — 3-7 дней в зависимости от удаленности. При заказе от 5000 ₽ доставка бесплатная.",
        },
        FaqEntry {
            question: "Есть ли скидки для постоянных клиентов?",
            answer: "Да! У нас действует накопительная бонусная программа. С каждой покупки вы получаете 5% бонусов, которые можно потратить на следующий заказ. Также регулярно проводим распродажи и специальные акции.",
        },
        FaqEntry {
            question: "Как узнать, подойдет ли набор по возрасту?",
            answer: "На каждом наборе указана рекомендуемая возрастная категория. Это не строгое ограничение, а ориентир по сложности сборки. Детям младше указанного возраста может потребоваться помощь взрослых.",
        },
        FaqEntry {
            question: "Можно ли вернуть товар если он не понравился?",
            answer: "Да, вы можете вернуть нераспакованный конструктор в течение 14 дней с момента получения. Если упаковка вскрыта, но детали не использовались — возврат возможен в течение 7 дней.",
        },
    ]
}
