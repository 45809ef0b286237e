//! # Site Content
//!
//! Everything the page renders that is not behavior: business details, benefit
//! copy, product cards, client segments, the gallery catalog and reviews.
//!
//! All data is `'static` so components can borrow it without cloning.

use serde::{Deserialize, Serialize};

/// Business identity
#[derive(Clone, Copy, Debug)]
pub struct SiteInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub city: &'static str,
}

/// Contact channels shown in the header, hero and contact section
#[derive(Clone, Copy, Debug)]
pub struct ContactInfo {
    /// International number used for the WhatsApp deep link
    pub whatsapp_number: &'static str,
    pub phone_display: &'static str,
    pub email: Option<&'static str>,
    pub location: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Benefit {
    pub title: &'static str,
    pub description: &'static str,
}

/// Longer-form benefit with a detail modal
#[derive(Clone, Copy, Debug)]
pub struct ExtraInfo {
    pub title: &'static str,
    pub brief: &'static str,
    pub body: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Product {
    pub title: &'static str,
    pub description: &'static str,
    pub badge: &'static str,
    pub image: &'static str,
}

/// Gallery tab identifiers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryTabKey {
    #[default]
    Jardines,
    Plantas,
    Cesped,
}

impl GalleryTabKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            GalleryTabKey::Jardines => "jardines",
            GalleryTabKey::Plantas => "plantas",
            GalleryTabKey::Cesped => "cesped",
        }
    }

    /// Catalog entry for this tab
    pub fn tab(&self) -> &'static GalleryTab {
        // GALLERY_TABS is declared in key order
        match self {
            GalleryTabKey::Jardines => &GALLERY_TABS[0],
            GalleryTabKey::Plantas => &GALLERY_TABS[1],
            GalleryTabKey::Cesped => &GALLERY_TABS[2],
        }
    }
}

/// Rendered height bucket of a gallery image
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSize {
    Tall,
    Medium,
    Wide,
}

impl ImageSize {
    pub fn height_class(&self) -> &'static str {
        match self {
            ImageSize::Tall => "h-[26rem]",
            ImageSize::Wide => "h-[18rem]",
            ImageSize::Medium => "h-[21rem]",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct GalleryImage {
    pub name: &'static str,
    pub src: &'static str,
    pub size: ImageSize,
}

#[derive(Clone, Copy, Debug)]
pub struct GalleryTab {
    pub key: GalleryTabKey,
    pub label: &'static str,
    pub images: &'static [GalleryImage],
}

#[derive(Clone, Copy, Debug)]
pub struct Review {
    pub author: &'static str,
    pub rating: u8,
    pub summary: &'static str,
    pub body: &'static str,
    pub source: &'static str,
}

pub const SITE: SiteInfo = SiteInfo {
    name: "Nuevos Espacios",
    description: "Nuevos Espacios es una empresa dedicada a la venta de jardines artificiales verticales, cesped sintetico y plantas artificiales en CABA, Buenos Aires.",
    url: "https://nuevosespacios.com.ar",
    city: "CABA, Buenos Aires",
};

pub const CONTACT: ContactInfo = ContactInfo {
    whatsapp_number: "5491139359554",
    phone_display: "+54 9 11 3935-9554",
    email: option_env!("EMAIL_ADDRESS"),
    location: "Villa Pueyrredon, CABA, Buenos Aires",
};

/// Prefilled text of every quote link
pub const DEFAULT_QUOTE_MESSAGE: &str =
    "Hola! Quiero un presupuesto para jardines verticales artificiales.";

pub const BENEFITS: &[Benefit] = &[
    Benefit {
        title: "Estetica todo el ano",
        description: "Ambientes siempre verdes, sin poda ni riego, ideales para interiores, balcones y locales comerciales.",
    },
    Benefit {
        title: "Instalacion profesional",
        description: "Asesoramiento y colocacion para que cada pared o espacio quede prolijo, resistente y listo para disfrutar.",
    },
    Benefit {
        title: "Bajo mantenimiento",
        description: "Materiales durables con minima limpieza y excelente presencia visual en hogares y proyectos corporativos.",
    },
];

pub const EXTRA_INFO: &[ExtraInfo] = &[
    ExtraInfo {
        title: "Instalacion en 24/48 hs",
        brief: "Planificamos la instalacion de forma agil y ordenada.",
        body: "Coordinamos visita y agenda para que el trabajo se realice sin demoras innecesarias y con el menor impacto en tu rutina.",
    },
    ExtraInfo {
        title: "Materiales UV y lavables",
        brief: "Elegimos materiales resistentes y faciles de cuidar.",
        body: "Seleccionamos paneles y plantas artificiales con buena terminacion visual, faciles de limpiar y con reposicion por modulo cuando hace falta.",
    },
    ExtraInfo {
        title: "Diseno adaptado a tu estilo",
        brief: "Definimos una propuesta que combine con tu espacio.",
        body: "Armamos una seleccion de colores y texturas para que el resultado refleje la identidad del ambiente y se vea armonico desde el primer dia.",
    },
    ExtraInfo {
        title: "Opciones de pago claras",
        brief: "Te ofrecemos alternativas para que avances con tranquilidad.",
        body: "Contas con opciones en cuotas y beneficios por pago en efectivo o transferencia, segun el tipo de trabajo que necesites.",
    },
    ExtraInfo {
        title: "Medicion y presupuesto",
        brief: "Recibis una propuesta completa antes de empezar.",
        body: "Tomamos medidas, recomendamos materiales y te enviamos un presupuesto detallado para que tengas claridad sobre alcance, tiempos y costo final.",
    },
];

pub const PRODUCTS: &[Product] = &[
    Product {
        title: "Jardines verticales artificiales",
        description: "Producto principal para crear muros verdes con impacto visual premium en interior o exterior.",
        badge: "Producto principal",
        image: "/product_jardin.jpeg",
    },
    Product {
        title: "Plantas artificiales",
        description: "Opciones decorativas realistas para completar oficinas, recepciones, hogares y eventos.",
        badge: "Complementario",
        image: "/product_plantas.webp",
    },
    Product {
        title: "Cesped sintetico",
        description: "Superficie uniforme y resistente para patios, terrazas, balcones y espacios recreativos.",
        badge: "Complementario",
        image: "/product_cesped_1.jpeg",
    },
];

pub const CLIENTS: &[&str] = &[
    "Estudios de arquitectura",
    "Locales gastronomicos",
    "Consorcios y constructoras",
    "Oficinas corporativas",
    "Tiendas y showrooms",
    "Clientes residenciales",
];

const fn image(name: &'static str, src: &'static str, size: ImageSize) -> GalleryImage {
    GalleryImage { name, src, size }
}

pub const GALLERY_TABS: &[GalleryTab] = &[
    GalleryTab {
        key: GalleryTabKey::Jardines,
        label: "Jardines verticales",
        images: &[
            image("Terraza Urbana", "/jardin_1.jpeg", ImageSize::Tall),
            image("Lobby Corporativo", "/jardin_2.jpeg", ImageSize::Wide),
            image("Patio Moderno", "/jardin_3.jpeg", ImageSize::Medium),
            image("Recepcion Comercial", "/jardin_4.jpeg", ImageSize::Tall),
            image("Proyecto 1", "/jardin_5.jpeg", ImageSize::Tall),
            image("Proyecto 2", "/jardin_6.jpg", ImageSize::Tall),
            image("Proyecto 3", "/jardin_7.jpg", ImageSize::Tall),
            image("Proyecto 4", "/jardin_8.jpeg", ImageSize::Tall),
            image("Proyecto 5", "/jardin_9.jpeg", ImageSize::Tall),
        ],
    },
    GalleryTab {
        key: GalleryTabKey::Plantas,
        label: "Plantas artificiales",
        images: &[
            image("Showroom Verde", "/5.jpg", ImageSize::Wide),
            image("Ingreso Comercial", "/6.jpeg", ImageSize::Medium),
            image("Pasillo Decorado", "/7.jpeg", ImageSize::Tall),
            image("Estar Moderno", "/8.jpeg", ImageSize::Medium),
        ],
    },
    GalleryTab {
        key: GalleryTabKey::Cesped,
        label: "Cesped sintetico",
        images: &[
            image("Balcon Privado", "/product_cesped_1.jpeg", ImageSize::Wide),
            image("Terraza Familiar", "/product_cesped_2.jpeg", ImageSize::Tall),
            image("Zona Recreativa", "/product_cesped_3.jpeg", ImageSize::Medium),
            image("Proyecto 1", "/product_cesped_4.jpeg", ImageSize::Medium),
            image("Proyecto 2", "/product_cesped_5.jpeg", ImageSize::Medium),
            image("Proyecto 3", "/product_cesped_6.jpeg", ImageSize::Medium),
            image("Proyecto 4", "/product_cesped_7.jpeg", ImageSize::Medium),
            image("Proyecto 5", "/product_cesped_8.jpeg", ImageSize::Medium),
        ],
    },
];

pub const REVIEWS: &[Review] = &[
    Review {
        author: "Romina G.",
        rating: 5,
        summary: "Excelente calidad y atencion",
        body: "Nos instalaron un jardin vertical en el quincho y quedo impecable. Cumplieron tiempos y asesoraron muy bien.",
        source: "Google",
    },
    Review {
        author: "Mariano P.",
        rating: 5,
        summary: "Super recomendables",
        body: "Buscabamos una solucion para la terraza y el cesped sintetico quedo perfecto. Muy prolijo el trabajo.",
        source: "Google",
    },
    Review {
        author: "Carla V.",
        rating: 5,
        summary: "Cambio total del local",
        body: "Sumamos paneles verdes y plantas artificiales en el ingreso del negocio. Mejora visual inmediata.",
        source: "Google",
    },
    Review {
        author: "Federico T.",
        rating: 5,
        summary: "Servicio profesional",
        body: "Desde el primer contacto hasta la instalacion todo fue claro. Materiales muy buenos y terminaciones excelentes.",
        source: "Google",
    },
    Review {
        author: "Luciana M.",
        rating: 5,
        summary: "Muy buena experiencia",
        body: "Nos ayudaron a elegir la combinacion correcta para el patio. El resultado quedo prolijo y con gran impacto visual.",
        source: "Google",
    },
    Review {
        author: "Diego R.",
        rating: 5,
        summary: "Atencion rapida y clara",
        body: "Pedi presupuesto por WhatsApp y respondieron enseguida. La instalacion fue ordenada y termino en el tiempo acordado.",
        source: "Google",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_lookup_matches_catalog_order() {
        for tab in GALLERY_TABS {
            assert_eq!(tab.key.tab().key, tab.key);
        }
        assert_eq!(GalleryTabKey::default(), GalleryTabKey::Jardines);
    }

    #[test]
    fn test_tab_key_wire_format() {
        let json = serde_json::to_string(&GalleryTabKey::Cesped).unwrap();
        assert_eq!(json, "\"cesped\"");
        let key: GalleryTabKey = serde_json::from_str("\"plantas\"").unwrap();
        assert_eq!(key, GalleryTabKey::Plantas);
        assert_eq!(key.as_str(), "plantas");
    }

    #[test]
    fn test_image_height_classes() {
        assert_eq!(ImageSize::Tall.height_class(), "h-[26rem]");
        assert_eq!(ImageSize::Wide.height_class(), "h-[18rem]");
        assert_eq!(ImageSize::Medium.height_class(), "h-[21rem]");
    }

    #[test]
    fn test_every_tab_has_images() {
        assert_eq!(GALLERY_TABS.len(), 3);
        assert!(GALLERY_TABS.iter().all(|tab| !tab.images.is_empty()));
    }

    #[test]
    fn test_uncaptioned_photos_use_neutral_names() {
        let names = |key: GalleryTabKey| -> Vec<&str> {
            key.tab().images.iter().map(|image| image.name).collect()
        };
        assert_eq!(
            names(GalleryTabKey::Jardines),
            [
                "Terraza Urbana",
                "Lobby Corporativo",
                "Patio Moderno",
                "Recepcion Comercial",
                "Proyecto 1",
                "Proyecto 2",
                "Proyecto 3",
                "Proyecto 4",
                "Proyecto 5",
            ]
        );
        assert_eq!(
            names(GalleryTabKey::Cesped)[3..],
            ["Proyecto 1", "Proyecto 2", "Proyecto 3", "Proyecto 4", "Proyecto 5"]
        );
    }
}
