use serde::{Deserialize, Serialize};

const DEVICON_BASE: &str = "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/icons";

/// One technology entry in the marquee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechItem {
    pub name: String,
    pub icon_url: String,
}

impl TechItem {
    fn devicon(name: impl Into<String>, slug: &str, variant: &str) -> Self {
        let name = name.into();
        Self {
            icon_url: format!("{DEVICON_BASE}/{slug}/{slug}-{variant}.svg"),
            name,
        }
    }
}

/// Named group of technologies rendered as one marquee row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechCategory {
    pub name: String,
    pub items: Vec<TechItem>,
}

/// Builds the fixed tech-stack categories, in display order.
pub fn tech_categories() -> Vec<TechCategory> {
    vec![
        TechCategory {
            name: "Web Development".into(),
            items: vec![
                TechItem::devicon("JavaScript", "javascript", "original"),
                TechItem::devicon("TypeScript", "typescript", "original"),
                TechItem::devicon("React", "react", "original"),
                TechItem::devicon("Next.js", "nextjs", "original"),
                TechItem::devicon("Node.js", "nodejs", "original"),
                TechItem::devicon("Express.js", "express", "original"),
                TechItem::devicon("Django", "django", "plain"),
                TechItem::devicon("Python", "python", "original"),
                TechItem::devicon("MongoDB", "mongodb", "original"),
                TechItem::devicon("PostgreSQL", "postgresql", "original"),
                TechItem::devicon("TailwindCSS", "tailwindcss", "original"),
                TechItem::devicon("HTML5", "html5", "original"),
                TechItem::devicon("CSS3", "css3", "original"),
            ],
        },
        TechCategory {
            name: "AI/ML & Data Science".into(),
            items: vec![
                TechItem::devicon("Python", "python", "original"),
                TechItem::devicon("TensorFlow", "tensorflow", "original"),
                TechItem::devicon("PyTorch", "pytorch", "original"),
                TechItem::devicon("Scikit-learn", "scikitlearn", "original"),
                TechItem::devicon("Pandas", "pandas", "original"),
                TechItem::devicon("NumPy", "numpy", "original"),
                TechItem::devicon("Keras", "keras", "original"),
                TechItem::devicon("Jupyter", "jupyter", "original"),
            ],
        },
        TechCategory {
            name: "DevOps & Tools".into(),
            items: vec![
                TechItem::devicon("Git", "git", "original"),
                TechItem::devicon("Docker", "docker", "original"),
                TechItem::devicon("Kubernetes", "kubernetes", "original"),
                TechItem::devicon("AWS", "amazonwebservices", "original"),
                TechItem::devicon("Google Cloud", "googlecloud", "original"),
                TechItem::devicon("Azure", "azure", "original"),
                TechItem::devicon("Jenkins", "jenkins", "original"),
                TechItem::devicon("Terraform", "terraform", "original"),
                TechItem::devicon("VS Code", "vscode", "original"),
                TechItem::devicon("Figma", "figma", "original"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_have_items_and_icon_urls() {
        let categories = tech_categories();
        assert_eq!(categories.len(), 3);

        for category in &categories {
            assert!(!category.items.is_empty());
            for item in &category.items {
                assert!(item.icon_url.starts_with(DEVICON_BASE));
                assert!(item.icon_url.ends_with(".svg"));
            }
        }
    }
}
