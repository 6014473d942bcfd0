use crate::item::{ContentId, ContentItem};

/// Builds the fixed project catalog, in display order.
pub fn projects() -> Vec<ContentItem> {
    vec![
        ContentItem::new(
            ContentId::new(1),
            "AI Code Assistant",
            "Intelligent assistant for code generation, debugging, and concept \
             explanation using LLMs. Supports natural language to code conversion \
             and multi-language support.",
            "AI/ML",
            "2024",
        )
        .with_tags(["Python", "TensorFlow", "OpenAI API", "Flask", "React"])
        .with_link("Source", "https://github.com/RudraPratapDev/ai-code-assistant")
        .with_stat("stars", 45)
        .with_stat("views", 320),
        ContentItem::new(
            ContentId::new(2),
            "Blockchain Voting System",
            "Secure, transparent online voting platform with blockchain technology \
             for immutability and verifiable audit trails. Built on Ethereum with \
             smart contracts.",
            "Blockchain",
            "2024",
        )
        .with_tags(["Solidity", "Hardhat", "React", "Web3.js", "Ethereum"])
        .with_link("Source", "https://github.com/RudraPratapDev/blockchain-voting")
        .with_stat("stars", 30)
        .with_stat("views", 210),
        ContentItem::new(
            ContentId::new(3),
            "Real-time Collaborative Whiteboard",
            "Web-based whiteboard for real-time multi-user drawing, with infinite \
             canvas, advanced tools, and presence indicators for seamless \
             collaboration.",
            "Web App",
            "2023",
        )
        .with_tags(["Node.js", "Socket.io", "React", "TypeScript", "Canvas API"])
        .with_link(
            "Source",
            "https://github.com/RudraPratapDev/collaborative-whiteboard",
        )
        .with_stat("stars", 28)
        .with_stat("views", 180),
        ContentItem::new(
            ContentId::new(4),
            "E-commerce Microservices",
            "Scalable e-commerce solution using microservices architecture for \
             catalog, orders, and authentication. Deployed with Docker and \
             Kubernetes.",
            "Backend",
            "2023",
        )
        .with_tags(["Spring Boot", "Node.js", "Kafka", "PostgreSQL", "Docker"])
        .with_link(
            "Source",
            "https://github.com/RudraPratapDev/ecommerce-microservices",
        )
        .with_stat("stars", 20)
        .with_stat("views", 105),
        ContentItem::new(
            ContentId::new(5),
            "Medical Image Segmentation",
            "AI model for precise segmentation of medical images using U-Net \
             architecture, assisting in diagnostics and medical research with high \
             accuracy.",
            "AI/ML",
            "2023",
        )
        .with_tags(["Python", "PyTorch", "U-Net", "OpenCV"])
        .with_link("Source", "https://github.com/RudraPratapDev/medical-segmentation")
        .with_stat("stars", 15)
        .with_stat("views", 80),
        ContentItem::new(
            ContentId::new(6),
            "Mobile Weather App",
            "Cross-platform weather application with location-based forecasts, \
             interactive maps, and push notifications for weather alerts.",
            "Mobile",
            "2023",
        )
        .with_tags(["React Native", "TypeScript", "Weather API", "Maps SDK"])
        .with_link("Source", "https://github.com/RudraPratapDev/weather-app")
        .with_stat("stars", 12)
        .with_stat("views", 95),
    ]
}

/// Builds the fixed blog-post catalog, in display order.
pub fn blog_posts() -> Vec<ContentItem> {
    vec![
        ContentItem::new(
            ContentId::new(1),
            "Building Scalable Web Applications with React and TypeScript",
            "Learn how to create robust, type-safe web applications that can scale \
             with your business needs. From project setup to deployment, this guide \
             covers best practices and advanced patterns.",
            "Web Development",
            "2024",
        )
        .with_tags(["React", "TypeScript", "Web Development", "Scalability"])
        .with_link(
            "Read Article",
            "https://medium.com/@your-username/building-scalable-web-applications",
        )
        .with_link("View Profile", "https://medium.com/@your-username")
        .with_stat("likes", 245)
        .with_stat("comments", 32),
        ContentItem::new(
            ContentId::new(2),
            "The Art of Clean Code: Principles Every Developer Should Know",
            "Discover the fundamental principles of writing clean, maintainable \
             code that your future self will thank you for. Learn about naming \
             conventions, functions, comments, and more.",
            "Programming",
            "2024",
        )
        .with_tags([
            "Programming",
            "Best Practices",
            "Code Quality",
            "Software Engineering",
        ])
        .with_link(
            "Read Article",
            "https://medium.com/@your-username/art-of-clean-code",
        )
        .with_link("View Profile", "https://medium.com/@your-username")
        .with_stat("likes", 387)
        .with_stat("comments", 45),
        ContentItem::new(
            ContentId::new(3),
            "Understanding Machine Learning: A Beginner's Guide",
            "A comprehensive introduction to machine learning concepts, algorithms, \
             and practical applications. Perfect for developers looking to venture \
             into AI and data science.",
            "AI/ML",
            "2023",
        )
        .with_tags(["Machine Learning", "AI", "Data Science", "Python"])
        .with_link(
            "Read Article",
            "https://medium.com/@your-username/understanding-machine-learning",
        )
        .with_link("View Profile", "https://medium.com/@your-username")
        .with_stat("likes", 512)
        .with_stat("comments", 68),
        ContentItem::new(
            ContentId::new(4),
            "Microservices Architecture: Design Patterns and Best Practices",
            "Explore the world of microservices architecture with practical design \
             patterns, communication strategies, and deployment considerations for \
             modern applications.",
            "Architecture",
            "2023",
        )
        .with_tags(["Microservices", "Architecture", "Docker", "Kubernetes"])
        .with_link(
            "Read Article",
            "https://medium.com/@your-username/microservices-architecture",
        )
        .with_link("View Profile", "https://medium.com/@your-username")
        .with_stat("likes", 298)
        .with_stat("comments", 41),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_catalog_integrity(items: &[ContentItem]) {
        assert!(!items.is_empty());

        for window in items.windows(2) {
            assert!(window[0].id < window[1].id, "catalog IDs must be ordered");
        }

        for item in items {
            assert!(!item.title.trim().is_empty());
            assert!(!item.description.trim().is_empty());
            assert!(!item.category.trim().is_empty());
            assert!(!item.tags.is_empty(), "{} has no tags", item.title);
            assert!(!item.links.is_empty(), "{} has no links", item.title);
            assert!(!item.published.trim().is_empty());
        }
    }

    #[test]
    fn project_catalog_is_well_formed() {
        assert_catalog_integrity(&projects());
    }

    #[test]
    fn blog_catalog_is_well_formed() {
        assert_catalog_integrity(&blog_posts());
    }

    #[test]
    fn catalogs_are_deterministic() {
        assert_eq!(projects(), projects());
        assert_eq!(blog_posts(), blog_posts());
    }
}
