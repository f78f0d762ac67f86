use crate::state::gallery::{Category, GalleryItem};

pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "#about", label: "About" },
    NavLink { href: "#portfolio", label: "Portfolio" },
    NavLink { href: "#services", label: "Services" },
    NavLink { href: "#blog", label: "Articles" },
    NavLink { href: "#testimonials", label: "Testimonials" },
    NavLink { href: "#contact", label: "Contact" },
];

pub struct Stat {
    pub value: &'static str,
    pub caption: &'static str,
}

pub const ABOUT_STATS: &[Stat] = &[
    Stat { value: "7+", caption: "Years crafting interfaces" },
    Stat { value: "120+", caption: "Projects shipped" },
    Stat { value: "20", caption: "Awards & features" },
];

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "UI/UX Design",
        description: "Research, wireframes, and interfaces that convert.",
        icon: "fas fa-globe",
    },
    Service {
        title: "Web Development",
        description: "Fast, accessible, and SEO-friendly builds.",
        icon: "fas fa-play",
    },
    Service {
        title: "Brand Systems",
        description: "Cohesive visual languages across products.",
        icon: "fas fa-filter",
    },
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Ava",
        role: "Product Lead",
        quote: "Crisp, modern, and undeniably thoughtful. Our conversions climbed.",
    },
    Testimonial {
        name: "Noah",
        role: "Founder",
        quote: "Interaction details feel effortless and premium.",
    },
    Testimonial {
        name: "Mia",
        role: "Marketing",
        quote: "Accessible, quick, and visually distinct.",
    },
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub excerpt: &'static str,
    pub date: String,
    pub image_ref: String,
}

/// Portfolio entries with categories cycling Web, E-commerce, Brand, App.
pub fn gallery_items(count: usize) -> Vec<GalleryItem> {
    (0..count)
        .map(|i| {
            let id = i as u32 + 1;
            GalleryItem {
                id,
                title: format!("Project {}", id),
                category: Category::ALL[i % Category::ALL.len()],
                image_ref: format!("https://picsum.photos/seed/art-{}/800/600", i),
            }
        })
        .collect()
}

pub fn blog_posts(count: usize) -> Vec<BlogPost> {
    (0..count)
        .map(|i| {
            let id = i as u32 + 1;
            BlogPost {
                id,
                title: format!("Design Notes {}", id),
                excerpt: "Layout rhythms, contrast, and micro-interactions that enhance clarity.",
                date: format!("2025-01-{:02}", id),
                image_ref: format!("https://picsum.photos/seed/blog-{}/1200/800", i),
            }
        })
        .collect()
}
