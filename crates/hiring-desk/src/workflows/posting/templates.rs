//! Canned copy used by the posting forms and the review fallbacks.

pub const DESCRIPTION_TEMPLATE: &str = "Role Summary

Consigo seeks a creative, detail-oriented Graphic Designer to support digital marketing, product imagery, and brand storytelling across our e-commerce channels.

Key Responsibilities

Designing product graphics and promotional assets
Creating social media visuals
Collaborating with marketing and product teams
Maintaining brand consistency across channels

Skills & Qualifications

Adobe Creative Suite (Photoshop, Illustrator, InDesign)
Digital illustration
E-commerce asset optimization
Typography and layout design
Experience with brand systems";

pub const CONFIRMATION_EMAIL_TEMPLATE: &str = "Thank you for your interest in our Graphic Designer role at Consigo!
We have received your application and our team will review it promptly. If your skills and experience align with the requirements of the position, we will be in touch with you soon.

Regards,
Consigo Talent Acquisition Team";

