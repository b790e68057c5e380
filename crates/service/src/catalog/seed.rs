use super::model::Service;

/// Records present at every process start.
pub fn initial_services() -> Vec<Service> {
    [
        (
            "SEO Optimization",
            "🔍",
            "Boost your search engine rankings and drive organic traffic with our expert SEO strategies and technical optimization.",
        ),
        (
            "Social Media Marketing",
            "📱",
            "Engage your audience and build your brand on platforms like Facebook, Instagram, LinkedIn, and more.",
        ),
        (
            "Paid Advertising",
            "💰",
            "Maximize ROI with data-driven paid advertising campaigns on Google, Facebook, Instagram, and other platforms.",
        ),
        (
            "Content Strategy",
            "✍️",
            "Create valuable, relevant content that attracts and retains your ideal customers through storytelling.",
        ),
        (
            "Email Marketing",
            "📧",
            "Nurture leads and drive sales with personalized email campaigns, automation, and segmentation.",
        ),
        (
            "Analytics & Reporting",
            "📈",
            "Track performance, measure success, and make data-driven decisions with comprehensive analytics.",
        ),
    ]
    .into_iter()
    .zip(1u64..)
    .map(|((name, icon, description), id)| Service {
        id,
        name: name.into(),
        icon: icon.into(),
        description: description.into(),
    })
    .collect()
}
