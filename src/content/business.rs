//! Business directory: record type, field mapping, sort options, fallback set.

use cikadu_query::{FieldMapping, Record, SortKey};
use serde::{Deserialize, Serialize};

/// One local business, as stored in the remote `businesses` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Business {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Phone number in display form.
    pub contact: String,
    pub location: String,
    pub image_url: String,
    /// Sector of the business. Older rows have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// ISO-8601 listing timestamp.
    pub created_at: String,
}

impl Business {
    /// `tel:` link for the call button.
    pub fn tel_link(&self) -> String {
        let digits: String = self
            .contact
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{digits}")
    }
}

impl Record for Business {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "description" => Some(&self.description),
            "location" => Some(&self.location),
            "contact" => Some(&self.contact),
            _ => None,
        }
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }
}

/// Business search covers name, description and location.
pub fn field_mapping() -> FieldMapping {
    FieldMapping::new(&["name", "description", "location"], "name", "location")
}

/// A sort choice offered on the directory page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOption {
    pub key: SortKey,
    pub label: &'static str,
}

/// Sort choices in display order; the first is the default.
pub const SORT_OPTIONS: &[SortOption] = &[
    SortOption {
        key: SortKey::PrimaryAscending,
        label: "Nama (A-Z)",
    },
    SortOption {
        key: SortKey::SecondaryAscending,
        label: "Lokasi",
    },
    SortOption {
        key: SortKey::RecencyDescending,
        label: "Terbaru",
    },
];

struct Seed {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    contact: &'static str,
    location: &'static str,
    image_url: &'static str,
    category: &'static str,
    created_at: &'static str,
}

const FALLBACK: &[Seed] = &[
    Seed {
        id: "1",
        name: "Kebun Organik Lembah Hijau",
        description: "Surga pertanian keluarga yang menghasilkan sayuran segar penuh nutrisi, rempah aromatik yang menggugah selera, dan telur ayam kampung berkualitas premium langsung dari ladang yang subur.",
        contact: "+62 812-3456-7890",
        location: "Kawasan Utara Desa",
        image_url: "https://images.unsplash.com/photo-1416879595882-3373a0480b5b?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80",
        category: "pertanian",
        created_at: "2024-01-14T09:00:00Z",
    },
    Seed {
        id: "2",
        name: "Sanggar Kerajinan Warisan Emas",
        description: "Karya seni autentik buatan tangan dari gerabah yang memukau, tekstil tradisional yang mempesona, dan ukiran kayu yang menakjubkan, diciptakan oleh seniman lokal menggunakan teknik turun-temurun.",
        contact: "+62 813-4567-8901",
        location: "Pusat Desa",
        image_url: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80",
        category: "kerajinan",
        created_at: "2024-01-13T09:00:00Z",
    },
    Seed {
        id: "3",
        name: "Kafe Pemandangan Gunung",
        description: "Kedai kopi yang menyajikan kopi lokal berkualitas tinggi, camilan tradisional yang menggugah kenangan, dan kue buatan rumah dengan pemandangan gunung yang memukau dari teras kami.",
        contact: "+62 814-5678-9012",
        location: "Jalan Utama",
        image_url: "https://images.unsplash.com/photo-1554118811-1e0d58224f24?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80",
        category: "kuliner",
        created_at: "2024-01-12T09:00:00Z",
    },
    Seed {
        id: "4",
        name: "Pemandu Wisata Alam Berpengalaman",
        description: "Layanan pemandu profesional untuk petualangan hiking yang menantang, pengamatan burung yang mempesona, dan tur budaya yang menginspirasi. Temukan permata tersembunyi bersama pemandu lokal berpengalaman.",
        contact: "+62 815-6789-0123",
        location: "Pusat Informasi Wisata",
        image_url: "https://images.unsplash.com/photo-1551632811-561732d1e306?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80",
        category: "wisata",
        created_at: "2024-01-11T09:00:00Z",
    },
    Seed {
        id: "5",
        name: "Toko Roti Fajar Berkah",
        description: "Toko roti tradisional yang membuat roti segar, kue kering yang lezat, dan makanan khas lokal setiap hari. Terkenal dengan oven kayu bakar dan resep kuno yang diwariskan turun-temurun.",
        contact: "+62 816-7890-1234",
        location: "Alun-alun Kota Lama",
        image_url: "https://images.unsplash.com/photo-1509440159596-0249088772ff?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80",
        category: "kuliner",
        created_at: "2024-01-10T09:00:00Z",
    },
    Seed {
        id: "6",
        name: "Apotek Herbal Tradisional",
        description: "Ramuan herbal tradisional dan produk kesehatan alami yang dibuat dari tanaman obat lokal yang ditanam sendiri. Konsultasi tersedia dengan ahli herbal bersertifikat yang berpengalaman.",
        contact: "+62 817-8901-2345",
        location: "Desa Bagian Timur",
        image_url: "https://images.unsplash.com/photo-1556909114-f6e7ad7d3136?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80",
        category: "kesehatan",
        created_at: "2024-01-09T09:00:00Z",
    },
    Seed {
        id: "7",
        name: "Warung Makan Cita Rasa Nusantara",
        description: "Hidangan autentik dengan cita rasa nusantara yang menggugah selera, menggunakan bahan-bahan segar dari kebun sendiri dan resep rahasia keluarga yang telah diwariskan berabad-abad.",
        contact: "+62 818-9012-3456",
        location: "Kawasan Utara Desa",
        image_url: "https://images.unsplash.com/photo-1414235077428-338989a2e8c0?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80",
        category: "kuliner",
        created_at: "2024-01-08T09:00:00Z",
    },
];

/// Built-in businesses served when the remote source is unavailable.
pub fn fallback_businesses() -> Vec<Business> {
    FALLBACK
        .iter()
        .map(|seed| Business {
            id: seed.id.to_owned(),
            name: seed.name.to_owned(),
            description: seed.description.to_owned(),
            contact: seed.contact.to_owned(),
            location: seed.location.to_owned(),
            image_url: seed.image_url.to_owned(),
            category: Some(seed.category.to_owned()),
            created_at: seed.created_at.to_owned(),
        })
        .collect()
}
