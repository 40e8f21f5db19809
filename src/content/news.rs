//! News articles: record type, field mapping, category options, fallback set.

use cikadu_query::{FieldMapping, Record};
use serde::{Deserialize, Serialize};

use super::CategoryOption;

/// One village news article, as stored in the remote `news` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    /// Article body as an HTML fragment.
    pub content: String,
    pub image_url: String,
    pub author: String,
    pub category: String,
    /// ISO-8601 publication timestamp.
    pub created_at: String,
}

impl Record for NewsArticle {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "title" => Some(&self.title),
            "excerpt" => Some(&self.excerpt),
            "content" => Some(&self.content),
            "author" => Some(&self.author),
            _ => None,
        }
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }
}

/// News search covers title and excerpt; "name" order is by title.
pub fn field_mapping() -> FieldMapping {
    FieldMapping::new(&["title", "excerpt"], "title", "author")
}

/// Category choices offered on the news page, `all` first.
pub const CATEGORIES: &[CategoryOption] = &[
    CategoryOption::new("all", "Semua Kategori"),
    CategoryOption::new("pendidikan", "Pendidikan"),
    CategoryOption::new("infrastruktur", "Infrastruktur"),
    CategoryOption::new("budaya", "Budaya"),
    CategoryOption::new("ekonomi", "Ekonomi"),
    CategoryOption::new("lingkungan", "Lingkungan"),
];

struct Seed {
    id: &'static str,
    title: &'static str,
    excerpt: &'static str,
    content: &'static str,
    image_url: &'static str,
    author: &'static str,
    category: &'static str,
    created_at: &'static str,
}

const FALLBACK: &[Seed] = &[
    Seed {
        id: "1",
        title: "Program Pemberdayaan Masyarakat melalui Pelatihan Keterampilan Digital",
        excerpt: "Mahasiswa KKN Universitas Nusa Putra menyelenggarakan pelatihan komputer dan media sosial untuk meningkatkan kemampuan digital warga Desa Cikadu dalam mengembangkan usaha mikro.",
        content: "<p>Program pelatihan keterampilan digital ini merupakan bagian dari kegiatan KKN yang bertujuan untuk meningkatkan literasi digital masyarakat desa. Kegiatan ini dilaksanakan selama dua minggu dengan melibatkan 50 peserta dari berbagai kalangan usia.</p>\
<p>Materi pelatihan meliputi penggunaan komputer dasar, pengelolaan media sosial untuk promosi usaha, dan pembuatan konten digital yang menarik. Para peserta sangat antusias mengikuti setiap sesi pelatihan yang dipandu langsung oleh mahasiswa KKN.</p>\
<p><strong>Dampak Positif Program</strong></p>\
<p>Program ini telah memberikan dampak yang luar biasa bagi masyarakat desa. Banyak peserta yang sebelumnya tidak familiar dengan teknologi digital, kini mulai dapat menggunakan smartphone dan komputer untuk mendukung usaha mereka.</p>\
<p>\"Kami sangat berterima kasih kepada mahasiswa KKN yang telah memberikan ilmu berharga ini. Sekarang kami bisa memasarkan produk kerajinan melalui media sosial,\" ujar Ibu Siti, salah satu peserta pelatihan yang menjalankan usaha kerajinan tangan.</p>\
<p><strong>Keberlanjutan Program</strong></p>\
<p>Program ini diharapkan dapat memberikan dampak jangka panjang bagi pengembangan ekonomi kreatif di Desa Cikadu. Dengan kemampuan digital yang meningkat, masyarakat dapat lebih mudah mengakses pasar yang lebih luas dan meningkatkan pendapatan keluarga.</p>\
<p>Ke depannya, akan dibentuk komunitas digital desa yang akan terus memberikan pendampingan dan sharing knowledge antar anggota. Hal ini diharapkan dapat menjaga keberlanjutan manfaat program pelatihan ini.</p>",
        image_url: "https://images.unsplash.com/photo-1516321318423-f06f85e504b3?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        author: "Tim KKN Universitas Nusa Putra",
        category: "pendidikan",
        created_at: "2024-01-15T10:00:00Z",
    },
    Seed {
        id: "2",
        title: "Gotong Royong Pembangunan Infrastruktur Jalan Desa",
        excerpt: "Masyarakat Desa Cikadu bersama mahasiswa KKN bergotong royong memperbaiki jalan desa yang rusak untuk memperlancar akses transportasi dan distribusi hasil pertanian.",
        content: "<p>Kegiatan gotong royong ini melibatkan seluruh elemen masyarakat dalam upaya perbaikan infrastruktur desa...</p>",
        image_url: "https://images.unsplash.com/photo-1581833971358-2c8b550f87b3?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        author: "Kepala Desa Cikadu",
        category: "infrastruktur",
        created_at: "2024-01-12T14:30:00Z",
    },
    Seed {
        id: "3",
        title: "Festival Budaya dan Seni Tradisional Desa Cikadu",
        excerpt: "Penyelenggaraan festival budaya tahunan yang menampilkan tarian tradisional, musik daerah, dan pameran kerajinan tangan sebagai upaya pelestarian warisan budaya lokal.",
        content: "<p>Festival budaya ini merupakan wadah untuk melestarikan dan memperkenalkan kekayaan budaya Desa Cikadu...</p>",
        image_url: "https://images.unsplash.com/photo-1533900298318-6b8da08a523e?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        author: "Karang Taruna Desa Cikadu",
        category: "budaya",
        created_at: "2024-01-10T19:00:00Z",
    },
    Seed {
        id: "4",
        title: "Pengembangan UMKM Produk Olahan Pertanian",
        excerpt: "Program pendampingan UMKM oleh mahasiswa KKN dalam mengembangkan produk olahan hasil pertanian lokal untuk meningkatkan nilai tambah dan daya saing produk desa.",
        content: "<p>Kegiatan pendampingan UMKM ini fokus pada pengembangan produk olahan yang memiliki nilai ekonomi tinggi...</p>",
        image_url: "https://images.unsplash.com/photo-1556909114-f6e7ad7d3136?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        author: "Tim Ekonomi KKN",
        category: "ekonomi",
        created_at: "2024-01-08T11:15:00Z",
    },
    Seed {
        id: "5",
        title: "Program Beasiswa Pendidikan untuk Anak Desa Berprestasi",
        excerpt: "Pemberian beasiswa pendidikan kepada siswa berprestasi dari keluarga kurang mampu sebagai bentuk investasi jangka panjang dalam pengembangan sumber daya manusia desa.",
        content: "<p>Program beasiswa ini merupakan hasil kerjasama antara pemerintah desa dengan berbagai pihak...</p>",
        image_url: "https://images.unsplash.com/photo-1503676260728-1c00da094a0b?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        author: "Dinas Pendidikan Desa",
        category: "pendidikan",
        created_at: "2024-01-05T16:45:00Z",
    },
    Seed {
        id: "6",
        title: "Program Penghijauan dan Konservasi Lingkungan",
        excerpt: "Kegiatan penanaman pohon dan edukasi lingkungan yang dilaksanakan mahasiswa KKN bersama masyarakat untuk menjaga kelestarian alam dan mencegah erosi tanah.",
        content: "<p>Program penghijauan ini merupakan bagian dari upaya konservasi lingkungan yang berkelanjutan...</p>",
        image_url: "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        author: "Tim Lingkungan KKN",
        category: "lingkungan",
        created_at: "2024-01-03T08:20:00Z",
    },
];

/// Built-in articles served when the remote source is unavailable.
/// Ordered newest first, like the remote listing.
pub fn fallback_articles() -> Vec<NewsArticle> {
    FALLBACK
        .iter()
        .map(|seed| NewsArticle {
            id: seed.id.to_owned(),
            title: seed.title.to_owned(),
            excerpt: seed.excerpt.to_owned(),
            content: seed.content.to_owned(),
            image_url: seed.image_url.to_owned(),
            author: seed.author.to_owned(),
            category: seed.category.to_owned(),
            created_at: seed.created_at.to_owned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn fallback_has_six_unique_articles() {
        let articles = fallback_articles();
        assert_eq!(articles.len(), 6);
        let ids: HashSet<&str> = articles.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn fallback_is_newest_first() {
        let articles = fallback_articles();
        for pair in articles.windows(2) {
            assert!(pair[0].created_at > pair[1].created_at);
        }
    }

    #[test]
    fn fallback_categories_are_offered() {
        let offered: HashSet<&str> = CATEGORIES.iter().map(|c| c.value).collect();
        for article in fallback_articles() {
            assert!(offered.contains(article.category.as_str()));
        }
    }

    #[test]
    fn record_fields_resolve_by_name() {
        let articles = fallback_articles();
        let article = &articles[2];
        assert_eq!(article.field("title"), Some(article.title.as_str()));
        assert_eq!(article.field("excerpt"), Some(article.excerpt.as_str()));
        assert_eq!(article.field("location"), None);
        assert_eq!(Record::category(article), Some("budaya"));
    }

    #[test]
    fn deserializes_remote_row() {
        let json = r#"{
            "id": "42",
            "title": "Panen Raya",
            "excerpt": "Ringkasan",
            "content": "<p>Isi</p>",
            "image_url": "https://example.com/a.jpg",
            "author": "Redaksi",
            "category": "ekonomi",
            "created_at": "2024-02-01T08:00:00Z"
        }"#;
        let article: NewsArticle = serde_json::from_str(json).expect("deserialize");
        assert_eq!(article.id, "42");
        assert_eq!(article.category, "ekonomi");
    }
}
