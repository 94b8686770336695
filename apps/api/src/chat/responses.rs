//! Canned coach replies. Text is returned verbatim, markdown included.

pub const HEADLINE_TIPS: &str = r#"Great question about LinkedIn headlines! Here are some tips for creating a compelling headline:

1. **Include your target role**: Be specific about what you do
2. **Add key skills**: Mention 2-3 relevant technologies or skills
3. **Show value**: What do you help companies achieve?
4. **Use keywords**: Include terms recruiters search for
5. **Keep it under 220 characters**

Example: "Senior Full Stack Developer | React & Node.js Expert | Building Scalable Web Applications | Helping Startups Grow"

Would you like me to help you craft a specific headline for your profile?"#;

pub const JOB_SEARCH_STRATEGY: &str = r#"Job searching can be challenging, but here's a strategic approach:

**1. Optimize Your Foundation**
- Update LinkedIn profile with keywords
- Prepare 2-3 versions of your resume
- Build a portfolio showcasing your best work

**2. Target Your Search**
- Identify 10-15 companies you'd love to work for
- Research their tech stack and culture
- Follow them on LinkedIn and engage with their content

**3. Network Strategically**
- Reach out to employees at target companies
- Attend industry meetups and virtual events
- Ask for informational interviews

**4. Apply Smart**
- Tailor each application to the specific role
- Apply within 24-48 hours of job posting
- Follow up after 1-2 weeks

What specific aspect of job searching would you like to dive deeper into?"#;

pub const SKILL_DEVELOPMENT: &str = r#"Skill development is crucial for career growth! Here's how to approach it strategically:

**1. Identify Market Demand**
- Research job postings in your target role
- Check LinkedIn skill assessments
- Look at industry trend reports

**2. Create a Learning Plan**
- Start with high-impact skills first
- Mix theoretical learning with hands-on practice
- Set specific, measurable goals

**3. Popular Skills by Role:**
- **Frontend**: React, TypeScript, Next.js, Tailwind CSS
- **Backend**: Node.js, Python, PostgreSQL, AWS
- **Full Stack**: All of the above plus system design
- **Leadership**: Project management, team communication, mentoring

**4. Learning Resources**
- Online courses (Udemy, Coursera, Pluralsight)
- Documentation and official tutorials
- Open source contributions
- Personal projects

What specific skills are you looking to develop?"#;

pub const INTERVIEW_PREPARATION: &str = r#"Interview preparation is key to landing your dream job! Here's a comprehensive approach:

**Technical Interviews:**
- Practice coding problems on LeetCode/HackerRank
- Review system design concepts
- Prepare to explain your past projects in detail
- Practice whiteboarding (even virtually)

**Behavioral Interviews:**
- Use the STAR method (Situation, Task, Action, Result)
- Prepare 5-7 stories showcasing different skills
- Research the company culture and values
- Prepare thoughtful questions about the role and team

**Common Questions to Prepare:**
- "Tell me about yourself"
- "Why do you want to work here?"
- "Describe a challenging project you worked on"
- "How do you handle conflict in a team?"

**Day of Interview:**
- Test your tech setup beforehand
- Have questions ready to ask them
- Bring copies of your resume
- Follow up within 24 hours

Would you like me to help you prepare for any specific type of interview question?"#;

/// Generic replies for messages no rule recognizes. Picked uniformly at random.
pub const FALLBACKS: [&str; 3] = [
    r#"That's an interesting question! Based on current industry trends, I'd recommend focusing on building a strong foundation in both technical skills and soft skills.

For technical growth, consider:
- Staying updated with the latest frameworks and tools
- Contributing to open source projects
- Building a portfolio that showcases real-world problem solving

For career development:
- Networking within your industry
- Seeking mentorship opportunities
- Developing leadership and communication skills

What specific area would you like to explore further?"#,
    r#"Great point! In today's competitive job market, it's important to differentiate yourself. Here are some strategies:

1. **Develop a unique skill combination** - Don't just be a "React developer," be a "React developer with UX design skills"
2. **Build in public** - Share your learning journey on LinkedIn and Twitter
3. **Contribute to the community** - Write blog posts, speak at meetups, help others
4. **Focus on business impact** - Always tie your technical work to business outcomes

The key is to be authentic and consistent in your professional brand. What aspect of personal branding interests you most?"#,
    r#"Excellent question! Career transitions can be challenging but very rewarding. Here's how to approach it:

**1. Assess Your Transferable Skills**
- Identify skills that apply to your target role
- Highlight relevant experience, even if from different industries
- Focus on problem-solving abilities and learning agility

**2. Bridge the Gap**
- Take online courses in your target field
- Work on relevant side projects
- Volunteer or freelance in the new area
- Network with professionals in the target industry

**3. Tell Your Story**
- Craft a compelling narrative about why you're making the change
- Show passion and commitment to the new field
- Demonstrate how your unique background adds value

What type of career transition are you considering?"#,
];
